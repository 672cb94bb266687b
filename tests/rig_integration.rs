//! Integration tests for the camera rig
//!
//! Drives `CameraRigController` against a real `CameraRig` the way the host
//! loop does, frame by frame.

use rts_camera::systems::SimulationSystem;
use rts_input::{CameraRigController, InputSample, RigSettings, TransformSink};
use rts_math::Vec3;
use rts_scene::{CameraRig, RigError, Transform};

const DT: f32 = 1.0 / 60.0;

fn rig(height: f32, depth: f32) -> CameraRig {
    CameraRig::new(
        Transform::from_position(Vec3::new(0.0, height, 0.0)),
        Transform::from_position(Vec3::new(0.0, 0.0, depth)),
    )
}

fn idle() -> InputSample {
    InputSample::centered(1920, 1080)
}

#[test]
fn test_missing_camera_aborts_setup() {
    let result = CameraRig::from_nodes(Some(Transform::default()), None);
    assert_eq!(result, Err(RigError::MissingCamera));
}

#[test]
fn test_initialize_clamps_camera_depth() {
    let mut rig = rig(10.0, -9.0);
    let controller = CameraRigController::initialize(RigSettings::default(), &mut rig);
    assert_eq!(controller.state().target_zoom, -2.0);
    // The camera itself glides to the clamped zoom rather than jumping
    assert_eq!(rig.camera_depth(), -9.0);
}

#[test]
fn test_scroll_in_zooms_and_tilts() {
    let mut rig = rig(10.0, 0.0);
    let mut controller = CameraRigController::initialize(RigSettings::default(), &mut rig);

    // Hold the wheel for one second
    for _ in 0..60 {
        SimulationSystem::step(&mut rig, &mut controller, &idle().with_scroll(1.0), DT);
    }
    assert_eq!(controller.state().target_zoom, 5.0);

    for _ in 0..300 {
        SimulationSystem::step(&mut rig, &mut controller, &idle(), DT);
    }
    assert!((rig.camera.position.z - 5.0).abs() < 1e-2);
    assert!((rig.camera.pitch + 25.0).abs() < 1e-2);
}

#[test]
fn test_rotation_then_edge_pan_uses_new_heading() {
    let mut rig = rig(10.0, 0.0);
    let mut controller = CameraRigController::initialize(RigSettings::default(), &mut rig);

    // Right-drag 9 units at rotation speed 10 -> 90 degrees
    SimulationSystem::step(&mut rig, &mut controller, &idle().with_drag(9.0), DT);
    assert_eq!(rig.rig.yaw, 90.0);

    // Pointer on the right edge now pans toward world -Z
    for _ in 0..60 {
        SimulationSystem::step(
            &mut rig,
            &mut controller,
            &idle().with_pointer(1919.0, 540.0),
            DT,
        );
    }
    let target = controller.state().target_position;
    assert!(target.z < -9.0, "target {:?}", target);
    assert!(target.x.abs() < 1e-3);
    assert_eq!(target.y, 10.0);
}

#[test]
fn test_drag_at_edge_does_not_pan() {
    let mut rig = rig(10.0, 0.0);
    let mut controller = CameraRigController::initialize(RigSettings::default(), &mut rig);

    let input = idle().with_pointer(0.0, 0.0).with_drag(0.1);
    for _ in 0..30 {
        SimulationSystem::step(&mut rig, &mut controller, &input, DT);
    }
    assert_eq!(controller.state().target_position, Vec3::new(0.0, 10.0, 0.0));
    assert_eq!(rig.rig.position, Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn test_height_never_drifts() {
    let mut rig = CameraRig::new(
        Transform::from_position(Vec3::new(0.0, 25.0, 0.0)).with_angles(50.0, 30.0),
        Transform::default(),
    );
    let mut controller = CameraRigController::initialize(RigSettings::default(), &mut rig);

    let corners = [(0.0, 0.0), (1919.0, 0.0), (1919.0, 1079.0), (0.0, 1079.0)];
    for (x, y) in corners {
        for _ in 0..30 {
            SimulationSystem::step(&mut rig, &mut controller, &idle().with_pointer(x, y), DT);
            assert_eq!(controller.state().target_position.y, 25.0);
            assert!((rig.rig.position.y - 25.0).abs() < 1e-4);
        }
    }
}

#[test]
fn test_frame_rate_independent_pan() {
    let settle = |fps: f32| {
        let mut rig = rig(10.0, 0.0);
        let mut controller = CameraRigController::initialize(RigSettings::default(), &mut rig);
        let dt = 1.0 / fps;
        let frames = fps as usize;
        let pan = idle().with_pointer(1919.0, 540.0);
        for _ in 0..frames {
            SimulationSystem::step(&mut rig, &mut controller, &pan, dt);
        }
        for _ in 0..frames * 3 {
            SimulationSystem::step(&mut rig, &mut controller, &idle(), dt);
        }
        rig.rig.position
    };

    let at_30 = settle(30.0);
    let at_120 = settle(120.0);
    assert!((at_30 - at_120).length() < 0.05, "{:?} vs {:?}", at_30, at_120);
    assert!((at_30.x - 10.0).abs() < 0.05);
}
