//! Scene-side types for the RTS camera rig
//!
//! - [`Transform`] - position plus pitch/yaw in degrees
//! - [`CameraRig`] - rig node with its child camera, implements
//!   [`rts_input::TransformSink`]
//! - [`RigError`] - rig assembly failures

mod error;
mod rig;
mod transform;

pub use error::RigError;
pub use rig::CameraRig;
pub use transform::Transform;
