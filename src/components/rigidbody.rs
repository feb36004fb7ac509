//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores the velocity of an entity and a set of
//! named acceleration forces (gravity being the usual one). Each force can be
//! toggled independently. The locomotion controller writes the vertical
//! component of the velocity directly (jump impulse, jump-cut, landing speed),
//! while the [`movement`](crate::systems::movement::movement) system folds the
//! forces in and integrates position.
//!
//! The `frozen` flag disables integration, for entities whose position is
//! driven by another system (a charging projectile following its shooter).

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the force [`GameConfig`](crate::resources::gameconfig::GameConfig)
/// keeps in sync with the configured gravity.
pub const GRAVITY_FORCE: &str = "gravity";

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationForce {
    /// Acceleration in world units per second squared.
    pub value: Vec2,
    pub enabled: bool,
}

impl AccelerationForce {
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Kinematic body storing velocity and named acceleration forces.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new().with_force(GRAVITY_FORCE, Vec2::new(0.0, -30.0));
/// rb.velocity.y += 12.0; // jump impulse
/// rb.set_force_enabled(GRAVITY_FORCE, false);
/// ```
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Named acceleration forces. The total acceleration is the sum of all enabled forces.
    pub forces: FxHashMap<String, AccelerationForce>,
    /// When true, the movement system skips this body entirely.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_force(mut self, name: &str, value: Vec2) -> Self {
        self.add_force(name, value);
        self
    }

    /// Add or update a named acceleration force (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    pub fn remove_force(&mut self, name: &str) {
        self.forces.remove(name);
    }

    /// Enable or disable a force by name.
    /// Returns false if the force doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Returns false if the force doesn't exist.
    pub fn set_force_value(&mut self, name: &str, value: Vec2) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.value = value;
            true
        } else {
            false
        }
    }

    pub fn get_force(&self, name: &str) -> Option<&AccelerationForce> {
        self.forces.get(name)
    }

    /// Sum of all enabled forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vec2::ZERO, |acc, f| acc + f.value)
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
