use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::worldtime::WorldTime;

/// Play out the running camera shake, one offset per tick.
///
/// Ordered after the systems that request shakes so the first offset lands on
/// the tick of the request.
pub fn camera_shake_system(
    camera: Option<ResMut<Camera2DRes>>,
    time: Res<WorldTime>,
    mut rng: Local<Rng>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    if camera.shake.is_none() {
        return;
    }
    camera.step_shake(time.delta, &mut rng);
}
