//! RTS Camera Input Handling
//!
//! This crate turns raw mouse input into smoothed camera rig motion for a
//! top-down strategy view:
//! - Pointer near the viewport border: edge-pan along the rig's right/forward axes
//! - Scroll wheel: zoom along the camera's local depth, with tilt compensation
//! - Right button + horizontal drag: free yaw rotation (suspends edge-pan)

mod camera_controller;
mod input_state;
mod sample;
mod settings;
mod sink;

pub use camera_controller::{CameraRigController, RigState};
pub use input_state::{InputState, MouseButtons};
pub use sample::InputSample;
pub use settings::{RigSettings, SettingsError};
pub use sink::TransformSink;
