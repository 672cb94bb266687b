//! 3D Transform (position, pitch, yaw)
//!
//! Rotation is applied as pitch about +X, then yaw about +Y. Roll is always
//! zero for camera rig nodes, so it is not stored.

use rts_math::Vec3;
use serde::{Serialize, Deserialize};

/// Position and Euler-style orientation of a scene node
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position (world space for a root node, parent space for a child)
    pub position: Vec3,
    /// Rotation about the local X axis in degrees, positive looks down
    pub pitch: f32,
    /// Rotation about the Y axis in degrees
    pub yaw: f32,
}

impl Transform {
    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Builder: set pitch and yaw
    pub fn with_angles(mut self, pitch: f32, yaw: f32) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::forward_from_angles(self.pitch, self.yaw)
    }

    pub fn right(&self) -> Vec3 {
        Vec3::right_from_yaw(self.yaw)
    }

    pub fn up(&self) -> Vec3 {
        Vec3::up_from_angles(self.pitch, self.yaw)
    }

    /// Transform a direction from local space to parent space
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.right() * d.x + self.up() * d.y + self.forward() * d.z
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_direction(p) + self.position
    }
}
