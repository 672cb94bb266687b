//! Math Library for the RTS camera rig
//!
//! ## Core Types
//!
//! - [`Vec2`] - screen-space vector (pixels)
//! - [`Vec3`] - world-space vector with x, y (up), z components
//!
//! ## Scalar helpers
//!
//! - [`approximately`], [`repeat`], [`delta_angle`]
//!
//! ## Smoothing
//!
//! - [`smooth_damp`], [`smooth_damp_angle`], [`smooth_damp_vec3`] - critically
//!   damped interpolation with a persisted velocity

mod vec2;
mod vec3;
pub mod scalar;
pub mod smooth;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use scalar::{approximately, delta_angle, repeat};
pub use smooth::{smooth_damp, smooth_damp_angle, smooth_damp_vec3};
