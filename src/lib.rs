//! Platformkit library.
//!
//! Exposes the ECS components, resources, systems and events of the platformer
//! controller for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
