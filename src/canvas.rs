use crate::constants::*;

/// Size of the rendering surface. Sprite coordinates are offsets from its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    width: i32,
    height: i32,
}

impl CanvasConfig {
    /// Returns `None` unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.width as f32 * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height as f32 * 0.5
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}
