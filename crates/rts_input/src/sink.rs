//! Transform access used by the controller
//!
//! The controller never touches a scene graph directly. Hosts implement
//! [`TransformSink`] for whatever owns the rig node and its child camera.

use rts_math::Vec3;

/// Trait for rig transform access
/// Allows the controller to work with different scene/transform implementations
///
/// Angles are Euler-style degrees. The rig carries yaw (about +Y) and its own
/// pitch; the child camera carries a local depth offset (local Z) and a local
/// pitch.
pub trait TransformSink {
    fn rig_position(&self) -> Vec3;
    fn set_rig_position(&mut self, position: Vec3);

    fn rig_yaw(&self) -> f32;
    /// Implementations must keep the rig's pitch and zero its roll
    fn set_rig_yaw(&mut self, yaw: f32);
    fn rig_pitch(&self) -> f32;

    fn camera_depth(&self) -> f32;
    fn set_camera_depth(&mut self, depth: f32);

    fn camera_pitch(&self) -> f32;
    /// Implementations must keep the camera's local yaw and roll
    fn set_camera_pitch(&mut self, pitch: f32);

    /// Rig right axis in world space
    fn rig_right(&self) -> Vec3 {
        Vec3::right_from_yaw(self.rig_yaw())
    }

    /// Rig forward axis in world space
    fn rig_forward(&self) -> Vec3 {
        Vec3::forward_from_angles(self.rig_pitch(), self.rig_yaw())
    }
}
