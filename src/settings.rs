//! Locomotion settings with persistence
//!
//! Settings are saved to `~/.config/stride/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stride_core::TimeConfig;
use stride_game::{FollowConfig, GroundSensorConfig, MovementConfig};
use tracing::{info, warn};

/// All tunables for the simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement: MovementConfig,
    pub ground: GroundSensorConfig,
    pub camera: FollowConfig,
    pub time: TimeConfig,
    pub physics: PhysicsSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Physics world settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Gravity along Y (negative is down)
    pub gravity: f32,
    /// Actor capsule height
    pub actor_height: f32,
    /// Actor capsule radius
    pub actor_radius: f32,
    /// Actor mass in kilograms
    pub actor_mass: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            actor_height: 1.8,
            actor_radius: 0.4,
            actor_mass: 70.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stride-settings-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&scratch_path("does-not-exist.toml"));
        assert_eq!(settings.movement.walk_speed, 2.0);
        assert_eq!(settings.ground.check_distance, 0.1);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip.toml");
        let mut settings = Settings::default();
        settings.movement.run_speed = 7.5;
        settings.camera.can_follow = false;

        settings.save_to(&path).expect("settings saved");
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.movement.run_speed, 7.5);
        assert!(!loaded.camera.can_follow);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            toml::from_str("[movement]\nwalk_speed = 3.0\nrun_speed = 6.0\njump_force = 100.0\nstationary_turn_speed = 90.0\nmoving_turn_speed = 180.0\n")
                .expect("partial settings parse");
        assert_eq!(settings.movement.walk_speed, 3.0);
        assert_eq!(settings.camera.movement_smoothness, 1.0);
        assert_eq!(settings.physics.gravity, -9.81);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let path = scratch_path("garbage.toml");
        fs::create_dir_all(path.parent().expect("has parent")).expect("dir created");
        fs::write(&path, "this is = = not toml").expect("file written");

        let settings = Settings::load_from(&path);
        assert_eq!(settings.movement.walk_speed, 2.0);

        let _ = fs::remove_file(&path);
    }
}
