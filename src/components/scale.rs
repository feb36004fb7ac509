use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::locomotion::Facing;

#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: Vec2,
}
impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
        }
    }

    /// Mirror the horizontal scale so its sign matches `facing`.
    /// The magnitude and the vertical scale are left untouched.
    pub fn face(&mut self, facing: Facing) {
        self.scale.x = self.scale.x.abs() * facing.sign();
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
