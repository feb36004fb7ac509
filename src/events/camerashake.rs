//! Camera shake request and its observer.
//!
//! Triggering a [`CameraShakeEvent`] starts a shake on the
//! [`Camera2DRes`] resource; [`camera_shake_system`] plays it out.
//! The camera is optional: without it the request is dropped with a warning.
//!
//! [`camera_shake_system`]: crate::systems::camera::camera_shake_system
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::camera2d::Camera2DRes;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraShakeEvent {
    /// Seconds the shake lasts.
    pub duration: f32,
    /// Max offset on each axis, in world units.
    pub magnitude: f32,
}

pub fn camera_shake_observer(trigger: On<CameraShakeEvent>, camera: Option<ResMut<Camera2DRes>>) {
    let event = trigger.event();
    let Some(mut camera) = camera else {
        warn!("Camera shake requested but no Camera2DRes is present");
        return;
    };
    debug!(
        "Camera shake: duration={} magnitude={}",
        event.duration, event.magnitude
    );
    camera.start_shake(event.duration, event.magnitude);
}
