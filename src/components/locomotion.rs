//! Platformer locomotion controller.
//!
//! [`LocomotionController`] turns per-tick directional input and a small
//! timer-driven jump model into a position displacement, a vertical velocity
//! on the entity's [`RigidBody`], and a [`LocomotionStatus`].
//!
//! # Horizontal movement
//!
//! Left and right keep separate, non-negative momentum. A held direction ramps
//! its momentum toward `movement_speed`; a released one keeps sliding and
//! bleeds off at the same rate while it is above 25% of the max speed. Below
//! that it stops contributing but is not reset.
//!
//! # Jumping
//!
//! Holding jump while grounded applies `jump_impulse_speed` and switches to
//! [`LocomotionStatus::Jumping`]. The hold time decides what happens on
//! release, see [`JumpRelease::classify`]. Leaving ground arms the coyote
//! timer; once it runs past `coyote_time_threshold` the controller is forced
//! airborne, whatever its status.
//!
//! Ground-contact collaborators call [`LocomotionController::land`],
//! [`LocomotionController::on_ground`] and [`LocomotionController::on_fall_off`]
//! (see [`crate::systems::ground::ground_contact_observer`]).
//!
//! The controller never touches the ECS directly: [`LocomotionController::tick`]
//! returns the displacement and appends one-shot requests to a
//! [`LocomotionCmds`] queue that the system forwards as messages.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::rigidbody::RigidBody;

/// Fraction of the max speed below which a released direction stops sliding.
const SLIDE_THRESHOLD: f32 = 0.25;

/// Release tiers as `(lower exclusive, upper inclusive, outcome)`, in seconds of hold.
const JUMP_RELEASE_TIERS: [(f32, f32, JumpRelease); 3] = [
    (0.0, 0.1, JumpRelease::SmallHop),
    (0.1, 0.25, JumpRelease::Cut(0.25)),
    (0.25, 100.0, JumpRelease::Cut(0.0)),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocomotionStatus {
    #[default]
    Grounded,
    Jumping,
    Airborne,
}

impl LocomotionStatus {
    /// Signal flags published for each status, one set at a time.
    pub const SIGNAL_KEYS: [&'static str; 3] = ["grounded", "jumping", "airborne"];

    pub fn signal_key(self) -> &'static str {
        match self {
            LocomotionStatus::Grounded => "grounded",
            LocomotionStatus::Jumping => "jumping",
            LocomotionStatus::Airborne => "airborne",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// What releasing the jump input does, depending on how long it was held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpRelease {
    /// Enable the small-hop extra fall force.
    SmallHop,
    /// Remove `factor * jump_impulse_speed` from the vertical velocity.
    Cut(f32),
}

impl JumpRelease {
    /// Look `held` up in the release tier table.
    ///
    /// - `(0, 0.1]` → [`JumpRelease::SmallHop`]
    /// - `(0.1, 0.25]` → `Cut(0.25)`
    /// - `(0.25, 100]` → `Cut(0.0)` (full jump)
    ///
    /// Durations outside every tier (zero, or absurdly long) return `None`.
    pub fn classify(held: f32) -> Option<Self> {
        JUMP_RELEASE_TIERS
            .iter()
            .find(|(lower, upper, _)| held > *lower && held <= *upper)
            .map(|(_, _, outcome)| *outcome)
    }
}

/// Tunables for a [`LocomotionController`], normally filled from
/// [`GameConfig`](crate::resources::gameconfig::GameConfig).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionConfig {
    /// Max horizontal speed, also the fast-fall speed.
    pub movement_speed: f32,
    /// Momentum ramp rate as a multiple of `movement_speed` per second.
    pub accel_deccel_speed: f32,
    /// Extra downward force during a small hop, as a multiple of the jump impulse.
    pub small_hop_fall_factor: f32,
    pub coyote_time_threshold: f32,
    pub jump_impulse_speed: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            movement_speed: 6.0,
            accel_deccel_speed: 4.0,
            small_hop_fall_factor: 0.5,
            coyote_time_threshold: 0.1,
            jump_impulse_speed: 12.0,
        }
    }
}

/// Input signals consumed by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocomotionInput {
    pub left_held: bool,
    pub right_held: bool,
    pub jump_held: bool,
    pub jump_released: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub fast_fall_held: bool,
}

/// One-shot requests emitted by [`LocomotionController::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocomotionCmd {
    /// Spawn a visual effect (dust) at `position`, oriented to `facing`.
    SpawnEffect { position: Vec2, facing: Facing },
}

pub type LocomotionCmds = SmallVec<[LocomotionCmd; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionState {
    pub status: LocomotionStatus,
    pub speed_left: f32,
    pub speed_right: f32,
    /// Seconds accumulated while Jumping, cleared on release.
    pub jump_held: f32,
    pub small_hop: bool,
    /// Cut factor applied by the last release.
    pub jump_factor: f32,
    pub coyote_timer: f32,
    /// Set when ground contact is lost; drives the coyote timer.
    pub fell_off: bool,
    pub facing: Facing,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            status: LocomotionStatus::Grounded,
            speed_left: 0.0,
            speed_right: 0.0,
            jump_held: 0.0,
            small_hop: false,
            jump_factor: 0.0,
            coyote_timer: 0.0,
            fell_off: true,
            facing: Facing::Right,
        }
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct LocomotionController {
    pub config: LocomotionConfig,
    pub state: LocomotionState,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            state: LocomotionState::default(),
        }
    }

    pub fn status(&self) -> LocomotionStatus {
        self.state.status
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Touch down: grounded, vertical velocity set to `ground_speed`, jump timer cleared.
    pub fn land(&mut self, ground_speed: f32, body: &mut RigidBody) {
        self.state.status = LocomotionStatus::Grounded;
        body.velocity.y = ground_speed;
        self.state.jump_held = 0.0;
        self.state.coyote_timer = 0.0;
    }

    /// Standing contact: grounded, vertical velocity set to `ground_speed`,
    /// coyote countdown stopped. The jump timer is kept.
    pub fn on_ground(&mut self, ground_speed: f32, body: &mut RigidBody) {
        body.velocity.y = ground_speed;
        self.state.status = LocomotionStatus::Grounded;
        self.state.fell_off = false;
        self.state.coyote_timer = 0.0;
    }

    /// Contact lost: start the coyote countdown and drop the platform's
    /// velocity from the body.
    pub fn on_fall_off(&mut self, ground_velocity: Vec2, body: &mut RigidBody) {
        self.state.fell_off = true;
        body.velocity -= ground_velocity;
    }

    /// Advance the controller by `dt` seconds.
    ///
    /// Mutates the vertical velocity of `body`, pushes effect requests onto
    /// `cmds` and returns the displacement to add to `position`.
    pub fn tick(
        &mut self,
        input: &LocomotionInput,
        dt: f32,
        body: &mut RigidBody,
        position: Vec2,
        cmds: &mut LocomotionCmds,
    ) -> Vec2 {
        let cfg = self.config;
        let state = &mut self.state;
        let max_speed = cfg.movement_speed;
        let rate = dt * max_speed * cfg.accel_deccel_speed;
        let mut displacement = Vec2::ZERO;

        // Holding both directions cancels both.
        let moving_left = input.left_held && !input.right_held;
        let moving_right = input.right_held && !input.left_held;

        displacement.x -= ramp_momentum(&mut state.speed_left, moving_left, max_speed, rate) * dt;
        if moving_left {
            state.facing = Facing::Left;
        }
        displacement.x += ramp_momentum(&mut state.speed_right, moving_right, max_speed, rate) * dt;
        if moving_right {
            state.facing = Facing::Right;
        }

        if input.jump_held && state.status == LocomotionStatus::Grounded {
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
            body.velocity.y += cfg.jump_impulse_speed;
            state.status = LocomotionStatus::Jumping;
        }

        if state.status == LocomotionStatus::Jumping {
            state.jump_held += dt;
        }

        if input.jump_released {
            state.status = LocomotionStatus::Airborne;
            state.jump_factor = match JumpRelease::classify(state.jump_held) {
                Some(JumpRelease::SmallHop) => {
                    state.small_hop = true;
                    0.0
                }
                Some(JumpRelease::Cut(factor)) => factor,
                None => 0.0,
            };
            body.velocity.y -= state.jump_factor * cfg.jump_impulse_speed;
            state.jump_held = 0.0;
        }

        if state.small_hop {
            body.velocity.y -= cfg.small_hop_fall_factor * cfg.jump_impulse_speed * dt;
            if body.velocity.y < 0.0 {
                state.small_hop = false;
            }
        }

        if input.fast_fall_held && state.status == LocomotionStatus::Airborne {
            displacement.y -= max_speed * dt;
        }

        if state.fell_off {
            state.coyote_timer += dt;
        }
        if state.coyote_timer > cfg.coyote_time_threshold {
            state.coyote_timer = 0.0;
            state.status = LocomotionStatus::Airborne;
        }

        if state.status == LocomotionStatus::Grounded {
            if input.right_pressed {
                cmds.push(LocomotionCmd::SpawnEffect {
                    position,
                    facing: Facing::Right,
                });
            }
            if input.left_pressed {
                cmds.push(LocomotionCmd::SpawnEffect {
                    position,
                    facing: Facing::Left,
                });
            }
        }

        displacement
    }
}

/// Update one direction's momentum and return the speed it contributes this tick.
fn ramp_momentum(speed: &mut f32, active: bool, max_speed: f32, rate: f32) -> f32 {
    if active {
        if *speed < max_speed {
            *speed += rate;
        }
        *speed
    } else if *speed > max_speed * SLIDE_THRESHOLD {
        *speed = (*speed - rate).max(0.0);
        *speed
    } else {
        0.0
    }
}
