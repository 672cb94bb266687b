//! Camera simulation system
//!
//! Manages the per-frame camera update:
//! - Delta time calculation
//! - Input sampling
//! - Controller update against the camera rig

use std::time::Instant;
use rts_input::{CameraRigController, InputSample, InputState};
use rts_math::Vec3;
use rts_scene::CameraRig;

/// Longest frame the controller will see, in seconds
const MAX_DT: f32 = 0.25;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Delta time actually fed to the controller
    pub dt: f32,
    /// Rig position after the update
    pub rig_position: Vec3,
    /// Camera position in world space after the update
    pub camera_position: Vec3,
}

/// Drives the camera controller once per frame
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame using wall-clock time
    ///
    /// Samples (and clears) the accumulated input, then advances the rig.
    pub fn update(
        &mut self,
        rig: &mut CameraRig,
        controller: &mut CameraRigController,
        input: &mut InputState,
    ) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let sample = input.sample();
        Self::step(rig, controller, &sample, raw_dt)
    }

    /// Run one frame with an explicit delta time
    ///
    /// `dt` is capped so a stall (first frame, window drag) doesn't fling the
    /// rig across the map.
    pub fn step(
        rig: &mut CameraRig,
        controller: &mut CameraRigController,
        sample: &InputSample,
        dt: f32,
    ) -> SimulationResult {
        let dt = dt.clamp(0.0, MAX_DT);
        let rig_position = controller.update(rig, dt, sample);

        SimulationResult {
            dt,
            rig_position,
            camera_position: rig.camera_world_position(),
        }
    }

    /// Forget time spent outside the loop (e.g. while suspended)
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rts_input::RigSettings;
    use rts_scene::Transform;

    fn setup() -> (CameraRig, CameraRigController) {
        let mut rig = CameraRig::new(
            Transform::from_position(Vec3::new(0.0, 10.0, 0.0)),
            Transform::default(),
        );
        let controller = CameraRigController::initialize(RigSettings::default(), &mut rig);
        (rig, controller)
    }

    #[test]
    fn test_delta_time_capped() {
        let (mut rig, mut controller) = setup();
        let sample = InputSample::centered(1280, 720);

        let result = SimulationSystem::step(&mut rig, &mut controller, &sample, 5.0);
        assert_eq!(result.dt, MAX_DT);

        let result = SimulationSystem::step(&mut rig, &mut controller, &sample, -1.0);
        assert_eq!(result.dt, 0.0);
    }

    #[test]
    fn test_step_reports_positions() {
        let (mut rig, mut controller) = setup();
        let sample = InputSample::centered(1280, 720).with_pointer(1279.0, 360.0);

        let result = SimulationSystem::step(&mut rig, &mut controller, &sample, 1.0 / 60.0);
        assert_eq!(result.rig_position, rig.rig.position);
        assert_eq!(result.camera_position, rig.camera_world_position());
        assert!(result.rig_position.x > 0.0);
    }

    #[test]
    fn test_update_consumes_input() {
        let (mut rig, mut controller) = setup();
        let mut input = InputState::new(winit::dpi::PhysicalSize::new(1280, 720));
        input.process_mouse_wheel(winit::event::MouseScrollDelta::LineDelta(0.0, 1.0));

        let mut sim = SimulationSystem::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let result = sim.update(&mut rig, &mut controller, &mut input);
        assert!(result.dt > 0.0);
        assert!(controller.state().target_zoom > 0.0);

        // Scroll was consumed by the first frame
        let zoom = controller.state().target_zoom;
        sim.update(&mut rig, &mut controller, &mut input);
        assert_eq!(controller.state().target_zoom, zoom);
    }
}
