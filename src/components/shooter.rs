//! Charge-based shooting components.
//!
//! A [`ChargeShooter`] charges while the fire input is held and fires a
//! [`Projectile`] on release. The longer the charge (up to
//! `max_charge_time`), the larger the charge multiplier, linearly from 1x to
//! 2x. While charging, a [`ChargingProjectile`] entity sits at the spawn point
//! and grows with the charge.
//!
//! The timing logic lives here; spawning, camera shake and sound requests are
//! issued by [`shooting_system`](crate::systems::shooting::shooting_system).

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct ShooterConfig {
    /// Seconds of hold needed for a full charge.
    pub max_charge_time: f32,
    /// Spawn point relative to the shooter, mirrored with its facing.
    pub spawn_offset: Vec2,
    pub projectile_speed: f32,
    /// Seconds a fired projectile lives.
    pub projectile_lifetime: f32,
    pub shake_duration: f32,
    pub shake_magnitude: f32,
    /// Sound effect played on fire, if any.
    pub sound_id: Option<String>,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            max_charge_time: 2.0,
            spawn_offset: Vec2::new(0.5, 0.0),
            projectile_speed: 20.0,
            projectile_lifetime: 5.0,
            shake_duration: 0.2,
            shake_magnitude: 0.1,
            sound_id: Some("shoot".to_string()),
        }
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct ChargeShooter {
    pub config: ShooterConfig,
    pub charge_time: f32,
    pub is_charging: bool,
    /// The placeholder shown while charging, despawned on fire.
    pub charging_projectile: Option<Entity>,
}

impl ChargeShooter {
    pub fn new(config: ShooterConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn start_charging(&mut self) {
        self.is_charging = true;
        self.charge_time = 0.0;
    }

    /// Accumulate charge, clamped to `[0, max_charge_time]`.
    /// Returns the current charge scale.
    pub fn update_charging(&mut self, dt: f32) -> f32 {
        self.charge_time = (self.charge_time + dt).clamp(0.0, self.config.max_charge_time);
        self.charge_scale()
    }

    /// `lerp(1, 2, charge_time / max_charge_time)`.
    pub fn charge_scale(&self) -> f32 {
        if self.config.max_charge_time <= 0.0 {
            return 2.0;
        }
        let t = (self.charge_time / self.config.max_charge_time).clamp(0.0, 1.0);
        1.0 + t
    }

    /// Stop charging and return the charge multiplier for the fired projectile.
    pub fn fire(&mut self) -> f32 {
        self.is_charging = false;
        self.charge_scale()
    }
}

/// Shown at the spawn point while charging.
#[derive(Component, Clone, Copy, Debug)]
pub struct ChargingProjectile {
    /// Scale before charge is applied.
    pub base_scale: Vec2,
}

/// A fired shot. `charge_multiplier` scales whatever the projectile does on hit.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub charge_multiplier: f32,
}
