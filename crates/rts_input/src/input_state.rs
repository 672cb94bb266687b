//! Accumulates winit mouse events into per-frame [`InputSample`]s
//!
//! Cursor positions arrive with a top-left origin; samples use a bottom-left
//! origin so that the top edge of the viewport reads as positive Y.

use bitflags::bitflags;
use rts_math::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::sample::InputSample;

bitflags! {
    /// Mouse buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

/// Mouse state between two frames
pub struct InputState {
    buttons: MouseButtons,
    // Top-left origin, as reported by the window
    cursor: Option<PhysicalPosition<f64>>,
    viewport: PhysicalSize<u32>,

    pending_motion_x: f32,
    pending_scroll: f32,

    // Configuration
    pub pointer_axis_scale: f32,
    pub scroll_axis_scale: f32,
}

impl InputState {
    pub fn new(viewport: PhysicalSize<u32>) -> Self {
        Self {
            buttons: MouseButtons::empty(),
            cursor: None,
            viewport,
            pending_motion_x: 0.0,
            pending_scroll: 0.0,
            pointer_axis_scale: 0.1,
            scroll_axis_scale: 0.1,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let flag = match button {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Right => MouseButtons::RIGHT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            _ => return,
        };
        self.buttons.set(flag, state == ElementState::Pressed);
    }

    /// Process cursor movement inside the window
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    /// Process raw mouse movement (device event)
    pub fn process_mouse_motion(&mut self, delta_x: f64, _delta_y: f64) {
        self.pending_motion_x += delta_x as f32;
    }

    /// Process scroll wheel input
    pub fn process_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
        };
        self.pending_scroll += scroll;
    }

    /// Track the window's inner size
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.viewport = size;
    }

    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Snapshot this frame's input and clear the per-frame deltas
    ///
    /// Until the cursor has been seen the pointer reads as the viewport centre.
    pub fn sample(&mut self) -> InputSample {
        let viewport = (self.viewport.width, self.viewport.height);
        let mut sample = InputSample::centered(viewport.0, viewport.1);

        if let Some(cursor) = self.cursor {
            sample.pointer_position = Vec2::new(
                cursor.x as f32,
                self.viewport.height as f32 - cursor.y as f32,
            );
        }

        sample.secondary_held = self.buttons.contains(MouseButtons::RIGHT);
        sample.pointer_delta_x = self.pending_motion_x * self.pointer_axis_scale;
        sample.scroll_delta = self.pending_scroll * self.scroll_axis_scale;

        self.pending_motion_x = 0.0;
        self.pending_scroll = 0.0;

        sample
    }

    /// Builder: set pointer axis scale
    pub fn with_pointer_axis_scale(mut self, scale: f32) -> Self {
        self.pointer_axis_scale = scale;
        self
    }

    /// Builder: set scroll axis scale
    pub fn with_scroll_axis_scale(mut self, scale: f32) -> Self {
        self.scroll_axis_scale = scale;
        self
    }
}
