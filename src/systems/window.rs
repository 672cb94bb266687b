//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates. The cursor
//! is never grabbed: edge-panning needs it free to reach the window border.

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use rts_input::RigState;
use rts_math::Vec3;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Viewport size in physical pixels
    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with rig state
    pub fn update_title(&self, state: &RigState, camera_position: Vec3) {
        self.window
            .set_title(&format_title(&self.base_title, state, camera_position));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title text showing camera position, zoom and yaw
pub fn format_title(base: &str, state: &RigState, camera_position: Vec3) -> String {
    let mode = if state.rotating { "[Rotating]" } else { "[Right-drag to rotate]" };
    format!(
        "{} - ({:.1}, {:.1}, {:.1}) Zoom:{:.2} Yaw:{:.0} {}",
        base,
        camera_position.x,
        camera_position.y,
        camera_position.z,
        state.target_zoom,
        state.yaw,
        mode
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
