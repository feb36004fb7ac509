//! Per-tick input resource.
//!
//! Captures the actions the game cares about and exposes them to systems via
//! the [`InputState`] resource. Hardware polling is not part of the crate:
//! each tick an [`InputFrame`] of held levels is fed in with
//! [`apply_input_frame`](crate::systems::input::apply_input_frame), and the
//! press/release edges are derived from the previous tick.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::locomotion::LocomotionInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edges.
pub struct BoolState {
    /// Whether the action is held this tick.
    pub active: bool,
    /// Whether the action went from released to held this tick.
    pub just_pressed: bool,
    /// Whether the action went from held to released this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Store the new held level and derive the edges against the previous one.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Resource capturing the per-tick state of every gameplay action.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub fast_fall: BoolState,
    pub fire: BoolState,
}

impl InputState {
    pub fn apply(&mut self, frame: &InputFrame) {
        self.move_left.update(frame.left);
        self.move_right.update(frame.right);
        self.jump.update(frame.jump);
        self.fast_fall.update(frame.down);
        self.fire.update(frame.fire);
    }

    /// Signals read by the locomotion controller.
    pub fn locomotion_input(&self) -> LocomotionInput {
        LocomotionInput {
            left_held: self.move_left.active,
            right_held: self.move_right.active,
            jump_held: self.jump.active,
            jump_released: self.jump.just_released,
            left_pressed: self.move_left.just_pressed,
            right_pressed: self.move_right.just_pressed,
            fast_fall_held: self.fast_fall.active,
        }
    }
}

fn one() -> u32 {
    1
}

/// Held levels for one tick, as stored in input scripts.
///
/// `repeat` lets a script hold the same frame for several ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub fire: bool,
    #[serde(default = "one", skip_serializing)]
    pub repeat: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolstate_edges_last_one_tick() {
        let mut s = BoolState::default();
        s.update(true);
        assert!(s.active && s.just_pressed && !s.just_released);
        s.update(true);
        assert!(s.active && !s.just_pressed && !s.just_released);
        s.update(false);
        assert!(!s.active && !s.just_pressed && s.just_released);
        s.update(false);
        assert_eq!(s, BoolState::default());
    }

    #[test]
    fn locomotion_input_maps_levels_and_edges() {
        let mut input = InputState::default();
        input.apply(&InputFrame {
            left: true,
            jump: true,
            ..Default::default()
        });
        input.apply(&InputFrame {
            left: true,
            down: true,
            ..Default::default()
        });
        let li = input.locomotion_input();
        assert!(li.left_held);
        assert!(!li.left_pressed);
        assert!(!li.jump_held);
        assert!(li.jump_released);
        assert!(li.fast_fall_held);
        assert!(!li.right_held);
    }
}
