//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes the new tunables into the
//! live entities and resources that copy them.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::locomotion::LocomotionController;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::shooter::ChargeShooter;
use crate::resources::gameconfig::GameConfig;
use crate::resources::groundplane::GroundPlane;

/// Apply [`GameConfig`] when it is added or modified.
///
/// - every [`LocomotionController`] gets the movement tunables
/// - every [`ChargeShooter`] gets the shooting tunables
/// - every body with a gravity force gets the configured gravity
/// - the [`GroundPlane`] height follows `ground_height`
///
/// Controller and shooter runtime state is kept.
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut controllers: Query<&mut LocomotionController>,
    mut shooters: Query<&mut ChargeShooter>,
    mut bodies: Query<&mut RigidBody>,
    plane: Option<ResMut<GroundPlane>>,
) {
    if !config.is_changed() {
        return;
    }

    for mut controller in controllers.iter_mut() {
        controller.config = config.locomotion;
    }
    for mut shooter in shooters.iter_mut() {
        shooter.config = config.shooter.clone();
    }
    let gravity = Vec2::new(0.0, config.gravity);
    for mut body in bodies.iter_mut() {
        if body.get_force(GRAVITY_FORCE).is_some() {
            body.set_force_value(GRAVITY_FORCE, gravity);
        }
    }
    if let Some(mut plane) = plane {
        plane.height = config.ground_height;
    }

    info!("GameConfig changes applied.");
}
