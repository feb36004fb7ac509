//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – clip playback state and despawn-at-progress for one-shot effects
//! - [`groundprobe`] – tracks ground contact for the ground probe system
//! - [`locomotion`] – the platformer locomotion controller (momentum, jump, coyote time)
//! - [`mapposition`] – world-space position for an entity
//! - [`rigidbody`] – kinematic body storing velocity and named forces
//! - [`scale`] – 2D scale, mirrored horizontally to show facing
//! - [`shooter`] – charge-based shooter and its projectiles
//! - [`signals`] – per-entity signal storage for cross-system communication
//! - [`ttl`] – countdown that despawns the entity when it runs out

pub mod animation;
pub mod groundprobe;
pub mod locomotion;
pub mod mapposition;
pub mod rigidbody;
pub mod scale;
pub mod shooter;
pub mod signals;
pub mod ttl;
