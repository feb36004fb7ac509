//! Simulation systems.
//!
//! Submodules overview
//! - [`animation`] – advance clip playback and despawn finished one-shot effects
//! - [`audio`] – advance and drain the audio command queue
//! - [`camera`] – play out camera shakes
//! - [`effects`] – spawn effect entities from effect requests
//! - [`gameconfig`] – push changed configuration into live entities
//! - [`ground`] – ground probe and the contact observer feeding the controller
//! - [`input`] – feed one tick of input into [`crate::resources::input::InputState`]
//! - [`locomotion`] – run the locomotion controllers
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`shooting`] – charge and fire projectiles
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose time-to-live ran out

pub mod animation;
pub mod audio;
pub mod camera;
pub mod effects;
pub mod gameconfig;
pub mod ground;
pub mod input;
pub mod locomotion;
pub mod movement;
pub mod shooting;
pub mod time;
pub mod ttl;
