//! RTS Camera - demo host
//!
//! Opens a window and drives the camera rig from the mouse. Rendering is left
//! to the embedding engine; the window title reports where the camera is.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use rts_camera::config::{AppConfig, ConfigError};
use rts_camera::systems::{SimulationSystem, WindowSystem};
use rts_input::{CameraRigController, InputState};
use rts_scene::{CameraRig, RigError};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    rig: CameraRig,
    controller: CameraRigController,
    input: InputState,
    simulation: SimulationSystem,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, RigError> {
        let mut rig = CameraRig::from_nodes(
            Some(config.rig.rig_transform()),
            Some(config.rig.camera_transform()),
        )?;

        let controller = CameraRigController::initialize(config.controller, &mut rig);

        let input = InputState::new(winit::dpi::PhysicalSize::new(
            config.window.width,
            config.window.height,
        ))
        .with_pointer_axis_scale(config.input.pointer_axis_scale)
        .with_scroll_axis_scale(config.input.scroll_axis_scale);

        Ok(Self {
            config,
            window: None,
            rig,
            controller,
            input,
            simulation: SimulationSystem::new(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match WindowSystem::create(event_loop, &self.config.window) {
                Ok(window) => window,
                Err(e) => {
                    log::error!("{}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.input.resize(window.inner_size());
            window.request_redraw();
            self.window = Some(window);
            self.simulation.reset_clock();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                self.input.resize(physical_size);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => event_loop.exit(),
                        KeyCode::KeyR => {
                            self.controller.reset_targets();
                            log::info!("Camera returning to starting position");
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.input.process_mouse_wheel(delta);
            }

            WindowEvent::RedrawRequested => {
                let result =
                    self.simulation
                        .update(&mut self.rig, &mut self.controller, &mut self.input);

                if let Some(window) = &self.window {
                    if self.config.debug.show_state_in_title {
                        window.update_title(&self.controller.state(), result.camera_position);
                    }
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Config first so its log level can seed the logger
    let loaded: Result<AppConfig, ConfigError> = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting RTS Camera");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app).expect("Event loop error");
}
