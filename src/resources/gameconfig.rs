//! Game configuration resource.
//!
//! Tunables loaded from an INI configuration file. Every value has a default,
//! so a missing file or key leaves the simulation playable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! speed = 6.0
//! accel_deccel = 4.0
//! small_hop_fall = 0.5
//! coyote_time = 0.1
//! jump_speed = 12.0
//!
//! [physics]
//! gravity = -30.0
//! ground_height = 0.0
//!
//! [shooting]
//! max_charge_time = 2.0
//! shake_duration = 0.2
//! shake_magnitude = 0.1
//! projectile_speed = 20.0
//! projectile_lifetime = 5.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::locomotion::LocomotionConfig;
use crate::components::shooter::ShooterConfig;

const DEFAULT_GRAVITY: f32 = -30.0;
const DEFAULT_GROUND_HEIGHT: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Changes to this resource are pushed into live entities by
/// [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub locomotion: LocomotionConfig,
    pub shooter: ShooterConfig,
    /// Vertical acceleration applied to every body with a gravity force.
    pub gravity: f32,
    pub ground_height: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            locomotion: LocomotionConfig::default(),
            shooter: ShooterConfig::default(),
            gravity: DEFAULT_GRAVITY,
            ground_height: DEFAULT_GROUND_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: speed={}, accel={}, jump={}, coyote={}, gravity={}",
            self.locomotion.movement_speed,
            self.locomotion.accel_deccel_speed,
            self.locomotion.jump_impulse_speed,
            self.locomotion.coyote_time_threshold,
            self.gravity
        );

        Ok(())
    }

    /// Parse configuration from INI text, same rules as [`Self::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| match config.getfloat(section, key) {
            Ok(value) => value.map(|v| v as f32),
            Err(e) => {
                warn!("Ignoring [{}] {}: {}", section, key, e);
                None
            }
        };

        // [movement] section
        let loco = &mut self.locomotion;
        if let Some(v) = float("movement", "speed") {
            loco.movement_speed = v;
        }
        if let Some(v) = float("movement", "accel_deccel") {
            loco.accel_deccel_speed = v;
        }
        if let Some(v) = float("movement", "small_hop_fall") {
            loco.small_hop_fall_factor = v;
        }
        if let Some(v) = float("movement", "coyote_time") {
            loco.coyote_time_threshold = v;
        }
        if let Some(v) = float("movement", "jump_speed") {
            loco.jump_impulse_speed = v;
        }

        // [physics] section
        if let Some(v) = float("physics", "gravity") {
            self.gravity = v;
        }
        if let Some(v) = float("physics", "ground_height") {
            self.ground_height = v;
        }

        // [shooting] section
        let shooter = &mut self.shooter;
        if let Some(v) = float("shooting", "max_charge_time") {
            shooter.max_charge_time = v;
        }
        if let Some(v) = float("shooting", "shake_duration") {
            shooter.shake_duration = v;
        }
        if let Some(v) = float("shooting", "shake_magnitude") {
            shooter.shake_magnitude = v;
        }
        if let Some(v) = float("shooting", "projectile_speed") {
            shooter.projectile_speed = v;
        }
        if let Some(v) = float("shooting", "projectile_lifetime") {
            shooter.projectile_lifetime = v;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let loco = &self.locomotion;
        let shooter = &self.shooter;

        config.set("movement", "speed", Some(loco.movement_speed.to_string()));
        config.set("movement", "accel_deccel", Some(loco.accel_deccel_speed.to_string()));
        config.set("movement", "small_hop_fall", Some(loco.small_hop_fall_factor.to_string()));
        config.set("movement", "coyote_time", Some(loco.coyote_time_threshold.to_string()));
        config.set("movement", "jump_speed", Some(loco.jump_impulse_speed.to_string()));

        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "ground_height", Some(self.ground_height.to_string()));

        config.set("shooting", "max_charge_time", Some(shooter.max_charge_time.to_string()));
        config.set("shooting", "shake_duration", Some(shooter.shake_duration.to_string()));
        config.set("shooting", "shake_magnitude", Some(shooter.shake_magnitude.to_string()));
        config.set("shooting", "projectile_speed", Some(shooter.projectile_speed.to_string()));
        config.set(
            "shooting",
            "projectile_lifetime",
            Some(shooter.projectile_lifetime.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
