//! Ground-contact events.
//!
//! Ground-contact collaborators (the
//! [`ground_probe_system`](crate::systems::ground::ground_probe_system), or any
//! trigger volume a game adds) report contact changes by triggering a
//! [`GroundContactEvent`]. The
//! [`ground_contact_observer`](crate::systems::ground::ground_contact_observer)
//! routes it to the entity's
//! [`LocomotionController`](crate::components::locomotion::LocomotionController).

use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// First touch after being in the air.
    Land { ground_speed: f32 },
    /// Contact continues this tick.
    OnGround { ground_speed: f32 },
    /// Contact lost; `ground_velocity` is the surface motion to cancel.
    FallOff { ground_velocity: Vec2 },
}

#[derive(Event, Debug, Clone, Copy)]
pub struct GroundContactEvent {
    pub entity: Entity,
    pub contact: GroundContact,
}
