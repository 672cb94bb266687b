//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RTS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use rts_input::{RigSettings, SettingsError};
use rts_math::Vec3;
use rts_scene::Transform;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Starting rig and camera transforms
    #[serde(default)]
    pub rig: RigConfig,
    /// Controller tuning
    #[serde(default)]
    pub controller: RigSettings,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RTS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Controller settings are range-checked after merging.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // RTS_CONTROLLER__PAN_THRESHOLD=30 -> controller.pan_threshold = 30
        figment = figment.merge(Env::prefixed("RTS_").split("__"));

        let config: Self = figment.extract()?;
        config.controller.validate()?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "RTS Camera".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Starting transforms for the rig node and its child camera
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Rig position [x, y, z]; y is kept as the rig height
    pub start_position: [f32; 3],
    /// Rig pitch in degrees
    pub pitch: f32,
    /// Rig yaw in degrees
    pub yaw: f32,
    /// Camera offset along its local Z axis
    pub camera_depth: f32,
    /// Camera local pitch in degrees
    pub camera_pitch: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 12.0, 0.0],
            pitch: 50.0,
            yaw: 0.0,
            camera_depth: 0.0,
            camera_pitch: 0.0,
        }
    }
}

impl RigConfig {
    pub fn rig_transform(&self) -> Transform {
        Transform::from_position(Vec3::from(self.start_position)).with_angles(self.pitch, self.yaw)
    }

    pub fn camera_transform(&self) -> Transform {
        Transform::from_position(Vec3::new(0.0, 0.0, self.camera_depth))
            .with_angles(self.camera_pitch, 0.0)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Axis units per pixel of horizontal mouse motion
    pub pointer_axis_scale: f32,
    /// Axis units per scroll line
    pub scroll_axis_scale: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pointer_axis_scale: 0.1,
            scroll_axis_scale: 0.1,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show rig targets in the window title
    pub show_state_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_state_in_title: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<SettingsError> for ConfigError {
    fn from(e: SettingsError) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.controller.pan_threshold, 20);
        assert_eq!(config.controller.camera_move_speed, 0.3);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("pan_threshold"));
        assert!(toml.contains("camera_depth"));
    }

    #[test]
    fn test_partial_controller_section() {
        let config: AppConfig = toml::from_str("[controller]\nmax_zoom = 8.0\n").unwrap();
        assert_eq!(config.controller.max_zoom, 8.0);
        assert_eq!(config.controller.min_zoom, -2.0);
    }

    #[test]
    fn test_rig_transforms() {
        let rig = RigConfig {
            start_position: [1.0, 15.0, -4.0],
            camera_depth: 2.5,
            ..Default::default()
        };
        assert_eq!(rig.rig_transform().position, Vec3::new(1.0, 15.0, -4.0));
        assert_eq!(rig.rig_transform().pitch, 50.0);
        assert_eq!(rig.camera_transform().position.z, 2.5);
    }

    #[test]
    fn test_settings_error_converts() {
        let err: ConfigError = SettingsError::OutOfRange {
            field: "max_zoom",
            value: 11.0,
            min: 0.0,
            max: 10.0,
        }
        .into();
        assert!(err.to_string().contains("max_zoom"));
    }
}
