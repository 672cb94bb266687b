//! Per-frame input snapshot

use rts_math::Vec2;

/// Everything the controller reads from the input devices in one frame
///
/// Pointer coordinates are pixels with the origin at the bottom-left corner of
/// the viewport and +Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Secondary (right) pointer button is held
    pub secondary_held: bool,
    /// Horizontal pointer movement since the last frame, in axis units
    pub pointer_delta_x: f32,
    /// Absolute pointer position in pixels
    pub pointer_position: Vec2,
    /// Scroll wheel movement since the last frame, positive zooms in
    pub scroll_delta: f32,
    /// Viewport size in pixels (width, height)
    pub viewport: (u32, u32),
}

impl InputSample {
    /// Pointer resting at the centre of a `width` x `height` viewport
    pub fn centered(width: u32, height: u32) -> Self {
        let mut sample = Self {
            viewport: (width, height),
            ..Self::default()
        };
        sample.pointer_position = sample.half_extents();
        sample
    }

    /// Builder: set pointer position
    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer_position = Vec2::new(x, y);
        self
    }

    /// Builder: set scroll delta
    pub fn with_scroll(mut self, delta: f32) -> Self {
        self.scroll_delta = delta;
        self
    }

    /// Builder: hold the secondary button while moving the pointer horizontally
    pub fn with_drag(mut self, delta_x: f32) -> Self {
        self.secondary_held = true;
        self.pointer_delta_x = delta_x;
        self
    }

    /// Half the viewport in whole pixels
    ///
    /// Odd sizes round down, so a 1921 px wide viewport has its centre at 960.
    pub fn half_extents(&self) -> Vec2 {
        let (width, height) = self.viewport;
        Vec2::new((width / 2) as f32, (height / 2) as f32)
    }
}
