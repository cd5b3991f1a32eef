//! Operator commands of the settings panel and the panel text.

use std::time::Duration;
use rand::Rng;
use crate::animation::AnimationLoop;
use crate::constants::*;
use crate::settings::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    SpeedUp,
    SpeedDown,
    MoreSprites,
    FewerSprites,
    ToggleRandomize,
    LongerInterval,
    ShorterInterval,
    ToggleAutoload,
    ResetDefaults,
    TogglePanel,
    /// The window was resized by the user.
    Resize { width: i32, height: i32 },
}

/// Panel visibility, the only state owned by the panel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub visible: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// What the host has to do after a command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Settings changed and should be written back.
    pub persist: bool,
    /// The window has to be resized to the canvas size.
    pub resize_window: bool,
}

impl Panel {
    pub fn apply<R: Rng>(
        &mut self,
        command: Command,
        animation: &mut AnimationLoop<R>,
        settings: &mut Settings,
        now: Duration,
    ) -> Outcome {
        let mut outcome = Outcome::default();

        match command {
            Command::TogglePause => animation.toggle_pause(),
            Command::TogglePanel => self.visible = !self.visible,
            Command::SpeedUp | Command::SpeedDown => {
                let step = if command == Command::SpeedUp { 1.0 } else { -1.0 };
                let speed = clamp_speed(settings.speed + step);
                if animation.set_speed(speed) {
                    settings.speed = speed;
                    outcome.persist = true;
                }
            }
            Command::MoreSprites | Command::FewerSprites => {
                let count = if command == Command::MoreSprites {
                    settings.count.saturating_add(COUNT_STEP)
                } else {
                    settings.count.saturating_sub(COUNT_STEP)
                };
                let count = clamp_count(count);
                if animation.set_count(count) {
                    settings.count = count;
                    outcome.persist = true;
                }
            }
            Command::ToggleRandomize => {
                settings.randomize_mode = !settings.randomize_mode;
                animation.set_randomize_mode(settings.randomize_mode, now);
                outcome.persist = true;
            }
            Command::LongerInterval | Command::ShorterInterval => {
                let step = if command == Command::LongerInterval { 1.0 } else { -1.0 };
                let seconds = clamp_randomize_n(settings.randomize_n + step);
                if animation.set_randomize_max_interval(seconds, now) {
                    settings.randomize_n = seconds;
                    outcome.persist = true;
                }
            }
            Command::ToggleAutoload => {
                settings.autoload = !settings.autoload;
                outcome.persist = true;
            }
            Command::ResetDefaults => {
                settings.reset();
                animation.set_canvas_size(settings.width, settings.height);
                animation.set_speed(settings.speed);
                animation.set_count(settings.count);
                animation.set_randomize_mode(settings.randomize_mode, now);
                animation.set_randomize_max_interval(settings.randomize_n, now);
                outcome.persist = true;
                outcome.resize_window = true;
            }
            Command::Resize { width, height } => {
                let unchanged = (width, height) == (settings.width, settings.height);
                if !unchanged && animation.set_canvas_size(width, height) {
                    settings.width = width;
                    settings.height = height;
                    outcome.persist = true;
                }
            }
        }

        outcome
    }

    /// Text lines of the panel, top to bottom.
    pub fn lines(&self, settings: &Settings) -> Vec<String> {
        let on_off = |flag: bool| if flag { "On" } else { "Off" };
        vec![
            "Controls".to_string(),
            format!("Speed: {}  (Up/Down)", settings.speed),
            format!("Count: {}  (Left/Right)", settings.count),
            format!("Size: {}x{}", settings.width, settings.height),
            format!("Randomize: {}  (R)", on_off(settings.randomize_mode)),
            format!("Max interval N: {}s  ([ / ])", settings.randomize_n),
            format!("Auto-load last session: {}  (A)", on_off(settings.autoload)),
            "Reset (Backspace)  Pause (P)  Hide (H)".to_string(),
        ]
    }
}
