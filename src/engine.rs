use crate::canvas::CanvasConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// Fixed status text drawn on top of the sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub text: &'static str,
    pub corner: Corner,
    pub font_size: i32,
    pub color: (u8, u8, u8),
}

pub const PAUSED_STATUS: StatusLine = StatusLine {
    text: "PAUSED (P)",
    corner: Corner::BottomRight,
    font_size: 14,
    color: (255, 255, 255),
};

pub const SLOWED_STATUS: StatusLine = StatusLine {
    text: "SLOW x1/5",
    corner: Corner::BottomLeft,
    font_size: 13,
    color: (255, 200, 0),
};

/// Distance between a status line and the canvas edges (pixels).
pub const STATUS_MARGIN: i32 = 8;

/// Drawing target of the animation loop.
pub trait Surface {
    /// Clears the frame and moves the origin to the canvas center.
    fn begin_frame(&mut self, canvas: &CanvasConfig);
    /// Draws image `image` with its top-left corner at (x, y), relative to the canvas center.
    fn draw_sprite(&mut self, image: usize, x: f32, y: f32, size: f32);
    fn draw_status(&mut self, status: &StatusLine);
}
