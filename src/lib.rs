//! RTS Camera
//!
//! Host integration for the mouse-driven RTS camera rig: layered
//! configuration, the per-frame simulation step and the application window.

pub mod config;
pub mod systems;
