//! Rig assembly errors

use std::fmt;

/// Error type for camera rig setup
///
/// A controller is inert without both nodes, so these abort setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// No rig node was supplied
    MissingRig,
    /// The rig node has no child camera
    MissingCamera,
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigError::MissingRig => write!(f, "Camera rig error: no rig node"),
            RigError::MissingCamera => write!(f, "Camera rig error: rig has no child camera"),
        }
    }
}

impl std::error::Error for RigError {}
