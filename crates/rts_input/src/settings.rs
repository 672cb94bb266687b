//! Author-tunable controller constants

use serde::{Serialize, Deserialize};

/// Controller tuning, fixed once the controller is initialized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Width of the edge-pan band in pixels
    pub pan_threshold: u32,
    /// Edge-pan speed (world units per second)
    pub movement_speed: f32,
    /// Closest zoom offset along the camera's local depth axis
    pub max_zoom: f32,
    /// Furthest zoom offset (zero or negative)
    pub min_zoom: f32,
    /// Zoom target change per second while scrolling
    pub zoom_speed: f32,
    /// Camera pitch in degrees reached at `max_zoom`
    pub max_rotation: f32,
    /// Yaw degrees per unit of horizontal pointer movement
    pub rotation_speed: f32,
    /// Smoothing time in seconds shared by position, zoom and tilt
    pub camera_move_speed: f32,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            pan_threshold: 20,
            movement_speed: 10.0,
            max_zoom: 5.0,
            min_zoom: -2.0,
            zoom_speed: 10.0,
            max_rotation: 25.0,
            rotation_speed: 10.0,
            camera_move_speed: 0.3,
        }
    }
}

impl RigSettings {
    /// Check every field against its documented range
    pub fn validate(&self) -> Result<(), SettingsError> {
        check("pan_threshold", self.pan_threshold as f32, 0.0, 40.0)?;
        check("movement_speed", self.movement_speed, 0.0, 50.0)?;
        check("max_zoom", self.max_zoom, 0.0, 10.0)?;
        check("min_zoom", self.min_zoom, -10.0, 0.0)?;
        check("zoom_speed", self.zoom_speed, 0.0, 50.0)?;
        check("max_rotation", self.max_rotation, 0.0, 90.0)?;
        check("rotation_speed", self.rotation_speed, 0.0, 50.0)?;
        check("camera_move_speed", self.camera_move_speed, 0.01, 2.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), SettingsError> {
    // NaN fails the range test as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange { field, value, min, max })
    }
}

/// Error type for rejected controller settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::OutOfRange { field, value, min, max } => write!(
                f,
                "Setting '{}' = {} is outside [{}, {}]",
                field, value, min, max
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(RigSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let settings = RigSettings {
            min_zoom: 1.0,
            ..Default::default()
        };
        match settings.validate() {
            Err(SettingsError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "min_zoom");
                assert_eq!(value, 1.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_smoothing_time_lower_bound() {
        let settings = RigSettings {
            camera_move_speed: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let settings = RigSettings {
            zoom_speed: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SettingsError::OutOfRange {
            field: "pan_threshold",
            value: 64.0,
            min: 0.0,
            max: 40.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("pan_threshold"));
        assert!(msg.contains("64"));
    }
}
