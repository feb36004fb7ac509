use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Flat walkable surface at `height`.
///
/// `surface_velocity` is the motion a body inherits while standing on it; it
/// is handed to the controller when the body walks off.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GroundPlane {
    pub height: f32,
    pub surface_velocity: Vec2,
}
