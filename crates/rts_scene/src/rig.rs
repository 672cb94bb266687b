//! Camera rig: a root node carrying a child camera
//!
//! The rig node moves across the map and yaws; the camera hangs off it at a
//! local offset whose Z component is the zoom depth, pitched independently.

use rts_input::TransformSink;
use rts_math::Vec3;

use crate::error::RigError;
use crate::transform::Transform;

/// Rig node plus child camera
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRig {
    /// Rig transform in world space
    pub rig: Transform,
    /// Camera transform relative to the rig
    pub camera: Transform,
}

impl CameraRig {
    pub fn new(rig: Transform, camera: Transform) -> Self {
        Self { rig, camera }
    }

    /// Assemble a rig from nodes that may be absent
    pub fn from_nodes(rig: Option<Transform>, camera: Option<Transform>) -> Result<Self, RigError> {
        let rig = rig.ok_or(RigError::MissingRig)?;
        let camera = camera.ok_or(RigError::MissingCamera)?;
        log::debug!(
            "Assembled camera rig at ({:.2}, {:.2}, {:.2}) with camera depth {:.2}",
            rig.position.x, rig.position.y, rig.position.z, camera.position.z
        );
        Ok(Self::new(rig, camera))
    }

    /// Camera position in world space
    pub fn camera_world_position(&self) -> Vec3 {
        self.rig.transform_point(self.camera.position)
    }

    /// Camera view direction in world space
    pub fn camera_world_forward(&self) -> Vec3 {
        self.rig.transform_direction(self.camera.forward())
    }
}

impl TransformSink for CameraRig {
    fn rig_position(&self) -> Vec3 {
        self.rig.position
    }

    fn set_rig_position(&mut self, position: Vec3) {
        self.rig.position = position;
    }

    fn rig_yaw(&self) -> f32 {
        self.rig.yaw
    }

    fn set_rig_yaw(&mut self, yaw: f32) {
        self.rig.yaw = yaw;
    }

    fn rig_pitch(&self) -> f32 {
        self.rig.pitch
    }

    fn camera_depth(&self) -> f32 {
        self.camera.position.z
    }

    fn set_camera_depth(&mut self, depth: f32) {
        self.camera.position.z = depth;
    }

    fn camera_pitch(&self) -> f32 {
        self.camera.pitch
    }

    fn set_camera_pitch(&mut self, pitch: f32) {
        self.camera.pitch = pitch;
    }

    fn rig_right(&self) -> Vec3 {
        self.rig.right()
    }

    fn rig_forward(&self) -> Vec3 {
        self.rig.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_from_nodes_requires_camera() {
        let rig = Transform::from_position(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(CameraRig::from_nodes(Some(rig), None), Err(RigError::MissingCamera));
        assert_eq!(
            CameraRig::from_nodes(None, Some(Transform::default())),
            Err(RigError::MissingRig)
        );
        assert!(CameraRig::from_nodes(Some(rig), Some(Transform::default())).is_ok());
    }

    #[test]
    fn test_depth_maps_to_camera_local_z() {
        let mut rig = CameraRig::default();
        rig.set_camera_depth(-2.0);
        assert_eq!(rig.camera.position.z, -2.0);
        assert_eq!(rig.camera_depth(), -2.0);
    }

    #[test]
    fn test_setters_keep_other_angles() {
        let mut rig = CameraRig::new(
            Transform::default().with_angles(30.0, 0.0),
            Transform::default().with_angles(0.0, 15.0),
        );
        rig.set_rig_yaw(90.0);
        assert_eq!(rig.rig.pitch, 30.0);
        rig.set_camera_pitch(-10.0);
        assert_eq!(rig.camera.yaw, 15.0);
    }

    #[test]
    fn test_camera_world_position_follows_yaw() {
        let mut rig = CameraRig::new(
            Transform::from_position(Vec3::new(5.0, 10.0, 5.0)),
            Transform::from_position(Vec3::new(0.0, 0.0, 3.0)),
        );
        let p = rig.camera_world_position();
        assert!((p - Vec3::new(5.0, 10.0, 8.0)).length() < EPSILON);

        rig.set_rig_yaw(90.0);
        let p = rig.camera_world_position();
        assert!((p - Vec3::new(8.0, 10.0, 5.0)).length() < EPSILON);
    }

    #[test]
    fn test_camera_world_forward_combines_pitch() {
        let rig = CameraRig::new(
            Transform::default().with_angles(45.0, 0.0),
            Transform::default().with_angles(45.0, 0.0),
        );
        let fwd = rig.camera_world_forward();
        assert!((fwd - (-Vec3::Y)).length() < EPSILON);
    }
}
