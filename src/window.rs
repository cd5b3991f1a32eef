use raylib::prelude::*;
use crate::canvas::CanvasConfig;
use crate::controls::Command;
use crate::engine::{Corner, StatusLine, Surface, STATUS_MARGIN};

const PANEL_MARGIN: i32 = 12;
const PANEL_PADDING: i32 = 10;
const PANEL_FONT_SIZE: i32 = 12;
const PANEL_LINE_HEIGHT: i32 = 16;

/// Draws the animation through a raylib draw handle.
pub struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a [Texture2D],
    canvas: CanvasConfig,
}

impl<'a, 'b> RaylibSurface<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>, textures: &'a [Texture2D]) -> Self {
        Self { d, textures, canvas: CanvasConfig::default() }
    }
}

impl Surface for RaylibSurface<'_, '_> {
    fn begin_frame(&mut self, canvas: &CanvasConfig) {
        self.canvas = *canvas;
        self.d.clear_background(Color::BLACK);
    }

    fn draw_sprite(&mut self, image: usize, x: f32, y: f32, size: f32) {
        let Some(texture) = self.textures.get(image) else {
            return;
        };
        if size <= 0.0 {
            return;
        }

        self.d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
            Rectangle::new(self.canvas.half_width() + x, self.canvas.half_height() + y, size, size),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_status(&mut self, status: &StatusLine) {
        let y = self.canvas.height() - STATUS_MARGIN - status.font_size;
        let x = match status.corner {
            Corner::BottomLeft => STATUS_MARGIN,
            Corner::BottomRight => {
                let width = self.d.measure_text(status.text, status.font_size);
                self.canvas.width() - STATUS_MARGIN - width
            }
        };
        let (r, g, b) = status.color;
        self.d.draw_text(status.text, x, y, status.font_size, Color::new(r, g, b, 255));
    }
}

/// Settings panel in the top-right corner of the window.
pub fn draw_panel(d: &mut RaylibDrawHandle, lines: &[String]) {
    let text_width = lines
        .iter()
        .map(|line| d.measure_text(line, PANEL_FONT_SIZE))
        .max()
        .unwrap_or(0);
    let width = text_width + PANEL_PADDING * 2;
    let height = lines.len() as i32 * PANEL_LINE_HEIGHT + PANEL_PADDING * 2;
    let x = d.get_screen_width() - PANEL_MARGIN - width;
    let y = PANEL_MARGIN;

    d.draw_rectangle(x, y, width, height, Color::new(0, 0, 0, 153));
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(
            line,
            x + PANEL_PADDING,
            y + PANEL_PADDING + i as i32 * PANEL_LINE_HEIGHT,
            PANEL_FONT_SIZE,
            Color::WHITE,
        );
    }
}

/// Commands triggered by the keyboard or by resizing the window this frame.
pub fn poll_commands(rl: &RaylibHandle) -> Vec<Command> {
    const BINDINGS: [(KeyboardKey, Command); 11] = [
        (KeyboardKey::KEY_P, Command::TogglePause),
        (KeyboardKey::KEY_UP, Command::SpeedUp),
        (KeyboardKey::KEY_DOWN, Command::SpeedDown),
        (KeyboardKey::KEY_RIGHT, Command::MoreSprites),
        (KeyboardKey::KEY_LEFT, Command::FewerSprites),
        (KeyboardKey::KEY_R, Command::ToggleRandomize),
        (KeyboardKey::KEY_RIGHT_BRACKET, Command::LongerInterval),
        (KeyboardKey::KEY_LEFT_BRACKET, Command::ShorterInterval),
        (KeyboardKey::KEY_A, Command::ToggleAutoload),
        (KeyboardKey::KEY_BACKSPACE, Command::ResetDefaults),
        (KeyboardKey::KEY_H, Command::TogglePanel),
    ];

    let mut commands: Vec<Command> = BINDINGS
        .iter()
        .filter(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    if rl.is_window_resized() {
        commands.push(Command::Resize {
            width: rl.get_screen_width(),
            height: rl.get_screen_height(),
        });
    }
    commands
}
