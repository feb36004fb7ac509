use bevy_ecs::prelude::Component;

/// Marks an entity whose contact with the
/// [`GroundPlane`](crate::resources::groundplane::GroundPlane) is tracked.
///
/// `in_contact` remembers the previous tick so the probe can tell a landing
/// from a continued stand and a walk-off.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GroundProbe {
    pub in_contact: bool,
}
