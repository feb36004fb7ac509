//! Shared 2D camera resource.
//!
//! Holds the camera target so systems agree on a single view position, plus
//! an optional running screen shake. The resource is optional: effects that
//! need it log a warning and skip when it is absent.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use glam::Vec2;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Debug, Clone, Default)]
pub struct Camera2DRes {
    pub target: Vec2,
    pub shake: Option<ShakeState>,
}

impl Camera2DRes {
    pub fn new(target: Vec2) -> Self {
        Self {
            target,
            shake: None,
        }
    }

    /// Start a shake around the current rest position.
    ///
    /// A shake that is already running keeps its rest position so the camera
    /// does not drift to a shaken offset.
    pub fn start_shake(&mut self, duration: f32, magnitude: f32) {
        let rest = self.shake.as_ref().map_or(self.target, |s| s.rest);
        self.shake = Some(ShakeState {
            rest,
            duration,
            magnitude,
            elapsed: 0.0,
        });
    }

    /// Advance the running shake by one tick, if any.
    pub fn step_shake(&mut self, dt: f32, rng: &mut Rng) {
        let Some(shake) = self.shake.as_mut() else {
            return;
        };
        match shake.step(dt, rng) {
            Some(offset) => self.target = shake.rest + offset,
            None => {
                self.target = shake.rest;
                self.shake = None;
            }
        }
    }
}

/// A bounded sequence of random camera offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeState {
    /// Where the camera returns when the shake ends.
    pub rest: Vec2,
    pub duration: f32,
    pub magnitude: f32,
    pub elapsed: f32,
}

impl ShakeState {
    /// Next offset in `[-magnitude, magnitude]` on both axes, or `None` once
    /// `duration` has elapsed.
    pub fn step(&mut self, dt: f32, rng: &mut Rng) -> Option<Vec2> {
        if self.elapsed >= self.duration {
            return None;
        }
        let offset = Vec2::new(
            (rng.f32() * 2.0 - 1.0) * self.magnitude,
            (rng.f32() * 2.0 - 1.0) * self.magnitude,
        );
        self.elapsed += dt;
        Some(offset)
    }
}
