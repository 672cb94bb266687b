//! Camera rig controller for top-down RTS input handling
//!
//! Controls:
//! - Pointer within `pan_threshold` px of a viewport edge: pan the rig
//! - Scroll wheel: zoom the camera along its local depth, tilting with zoom
//! - Right button + horizontal drag: rotate the rig about +Y
//!
//! Each frame runs rotation, then zoom/tilt, then position. Rotation goes
//! first because it decides whether edge-panning is suspended this frame.

use rts_math::{approximately, smooth_damp, smooth_damp_angle, smooth_damp_vec3, Vec2, Vec3};

use crate::sample::InputSample;
use crate::settings::RigSettings;
use crate::sink::TransformSink;

/// Read-only view of the controller's targets, for debug display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    pub target_position: Vec3,
    pub target_zoom: f32,
    pub target_pitch: f32,
    pub yaw: f32,
    pub rotating: bool,
}

/// Mouse-driven controller for a camera rig
pub struct CameraRigController {
    settings: RigSettings,

    // Position state
    initial_position: Vec3,
    target_position: Vec3,
    position_velocity: Vec3,
    height: f32,

    // Zoom and tilt state
    initial_zoom: f32,
    target_zoom: f32,
    zoom_velocity: f32,
    tilt_velocity: f32,

    // Rotation state
    yaw: f32,
    rotating: bool,
}

impl CameraRigController {
    /// Capture the rig's current transform and pin it in place
    ///
    /// The rig height seen here is kept for the controller's lifetime.
    pub fn initialize<S: TransformSink>(settings: RigSettings, rig: &mut S) -> Self {
        let position = rig.rig_position();
        let zoom = clamp_zoom(&settings, rig.camera_depth());

        let controller = Self {
            settings,
            initial_position: position,
            target_position: position,
            position_velocity: Vec3::ZERO,
            height: position.y,
            initial_zoom: zoom,
            target_zoom: zoom,
            zoom_velocity: 0.0,
            tilt_velocity: 0.0,
            yaw: rig.rig_yaw(),
            rotating: false,
        };

        rig.set_rig_position(controller.target_position);

        log::debug!(
            "Camera rig initialized at ({:.2}, {:.2}, {:.2}), zoom {:.2}, yaw {:.1}",
            position.x, position.y, position.z, zoom, controller.yaw
        );

        controller
    }

    /// Advance the rig by one frame
    ///
    /// A `dt` of zero leaves every target and smoothed value where it is.
    /// Returns the rig position for debug display.
    pub fn update<S: TransformSink>(&mut self, rig: &mut S, dt: f32, input: &InputSample) -> Vec3 {
        let dt = dt.max(0.0);

        self.update_rotation(rig, input);
        self.update_zoom(rig, dt, input);
        self.update_position(rig, dt, input);

        log::trace!(
            "rig target ({:.2}, {:.2}, {:.2}) zoom {:.2} yaw {:.1} rotating {}",
            self.target_position.x,
            self.target_position.y,
            self.target_position.z,
            self.target_zoom,
            self.yaw,
            self.rotating
        );

        rig.rig_position()
    }

    fn update_rotation<S: TransformSink>(&mut self, rig: &mut S, input: &InputSample) {
        self.rotating = input.secondary_held;
        if self.rotating {
            self.yaw += input.pointer_delta_x * self.settings.rotation_speed;
            rig.set_rig_yaw(self.yaw);
        }
    }

    fn update_zoom<S: TransformSink>(&mut self, rig: &mut S, dt: f32, input: &InputSample) {
        let scroll = input.scroll_delta;
        if !approximately(scroll, 0.0) {
            let step = dt * self.settings.zoom_speed;
            let zoom = if scroll < 0.0 {
                self.target_zoom - step
            } else {
                self.target_zoom + step
            };
            self.target_zoom = clamp_zoom(&self.settings, zoom);
        }

        let smooth_time = self.settings.camera_move_speed;

        let depth = smooth_damp(
            rig.camera_depth(),
            self.target_zoom,
            &mut self.zoom_velocity,
            smooth_time,
            dt,
        );
        rig.set_camera_depth(depth);

        let pitch = smooth_damp_angle(
            rig.camera_pitch(),
            self.target_pitch(),
            &mut self.tilt_velocity,
            smooth_time,
            dt,
        );
        rig.set_camera_pitch(pitch);
    }

    fn update_position<S: TransformSink>(&mut self, rig: &mut S, dt: f32, input: &InputSample) {
        let edge = self.screen_edge_vector(self.settings.pan_threshold as f32, input);
        let step = dt * self.settings.movement_speed;

        if !approximately(edge.x, 0.0) {
            let right = rig.rig_right() * step;
            if edge.x < 0.0 {
                self.target_position -= right;
            } else {
                self.target_position += right;
            }
        }
        if !approximately(edge.y, 0.0) {
            let forward = rig.rig_forward() * step;
            if edge.y < 0.0 {
                self.target_position -= forward;
            } else {
                self.target_position += forward;
            }
        }

        // A pitched rig has a forward axis with a y component
        self.target_position.y = self.height;

        let position = smooth_damp_vec3(
            rig.rig_position(),
            self.target_position,
            &mut self.position_velocity,
            self.settings.camera_move_speed,
            dt,
        );
        rig.set_rig_position(position);
    }

    /// How far the pointer sits beyond the edge-pan band, per axis
    ///
    /// Zero inside the dead-zone, growing linearly (sign-preserving) once the
    /// pointer is within `margin` px of an edge. Always zero while rotating.
    pub fn screen_edge_vector(&self, margin: f32, input: &InputSample) -> Vec2 {
        if self.rotating {
            return Vec2::ZERO;
        }

        let half = input.half_extents();
        let offset = input.pointer_position - half;

        Vec2::new(
            edge_excess(offset.x, half.x - margin),
            edge_excess(offset.y, half.y - margin),
        )
    }

    /// Camera pitch implied by the current zoom target
    ///
    /// `-max_rotation` scaled by `zoom / max_zoom` clamped to `[0, 1]`. A
    /// non-positive `max_zoom` yields zero tilt.
    pub fn target_pitch(&self) -> f32 {
        let max_zoom = self.settings.max_zoom;
        let fraction = if max_zoom > f32::EPSILON {
            (self.target_zoom / max_zoom).clamp(0.0, 1.0)
        } else {
            0.0
        };
        -self.settings.max_rotation * fraction
    }

    /// Send the targets back to where they were at initialization
    ///
    /// Velocities are kept, so the rig glides back instead of jumping.
    pub fn reset_targets(&mut self) {
        self.target_position = self.initial_position;
        self.target_zoom = self.initial_zoom;
    }

    pub fn state(&self) -> RigState {
        RigState {
            target_position: self.target_position,
            target_zoom: self.target_zoom,
            target_pitch: self.target_pitch(),
            yaw: self.yaw,
            rotating: self.rotating,
        }
    }

    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Fixed rig height captured at initialization
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Excess of `offset` beyond `boundary`, sign-preserving, or zero inside it
#[inline]
fn edge_excess(offset: f32, boundary: f32) -> f32 {
    if offset.abs() > boundary {
        offset - boundary * offset.signum()
    } else {
        0.0
    }
}

#[inline]
fn clamp_zoom(settings: &RigSettings, zoom: f32) -> f32 {
    zoom.max(settings.min_zoom).min(settings.max_zoom)
}
