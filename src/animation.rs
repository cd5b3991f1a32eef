use std::num::NonZeroUsize;
use std::time::Duration;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use crate::canvas::CanvasConfig;
use crate::constants::*;
use crate::engine::{Surface, PAUSED_STATUS, SLOWED_STATUS};
use crate::field::SpriteField;
use crate::scheduler::{MotionState, RandomizeScheduler};

/// Values the animation starts from, usually restored settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartupValues {
    pub speed: f32,
    pub count: usize,
    pub width: i32,
    pub height: i32,
    pub randomize_mode: bool,
    pub randomize_n: f64,
}

impl Default for StartupValues {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            randomize_mode: DEFAULT_RANDOMIZE_MODE,
            randomize_n: DEFAULT_RANDOMIZE_N,
        }
    }
}

/// Everything that changes while the screensaver runs.
pub struct SimulationState {
    pub canvas: CanvasConfig,
    pub motion: MotionState,
    pub scheduler: RandomizeScheduler,
    pub field: SpriteField,
    pub paused: bool,
}

/// Per-frame driver. The host calls `frame` from its redraw loop and forwards
/// operator changes through the setters, all on the same thread.
pub struct AnimationLoop<R: Rng = StdRng> {
    state: SimulationState,
    rng: R,
}

impl<R: Rng> AnimationLoop<R> {
    pub fn new(values: StartupValues, image_count: NonZeroUsize, mut rng: R, now: Duration) -> Self {
        let canvas = CanvasConfig::new(values.width, values.height).unwrap_or_else(|| {
            warn!(width = values.width, height = values.height, "invalid canvas size, using defaults");
            CanvasConfig::default()
        });
        let speed = if values.speed.is_finite() && values.speed > 0.0 {
            values.speed
        } else {
            warn!(speed = values.speed, "invalid speed, using default");
            DEFAULT_SPEED
        };

        let count = if values.count > 0 {
            values.count
        } else {
            warn!("zero sprite count, using default");
            DEFAULT_COUNT
        };

        let field = SpriteField::new(count, &canvas, image_count, &mut rng);
        let scheduler = RandomizeScheduler::new(values.randomize_mode, values.randomize_n, now, &mut rng);

        info!(
            speed,
            count = field.len(),
            width = canvas.width(),
            height = canvas.height(),
            randomize = scheduler.is_enabled(),
            max_interval = scheduler.max_interval(),
            images = image_count.get(),
            "animation ready"
        );

        Self {
            state: SimulationState {
                canvas,
                motion: MotionState::new(speed),
                scheduler,
                field,
                paused: false,
            },
            rng,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn canvas(&self) -> CanvasConfig {
        self.state.canvas
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn frame<S: Surface>(&mut self, now: Duration, surface: &mut S) {
        let SimulationState { canvas, motion, scheduler, field, paused } = &mut self.state;

        surface.begin_frame(canvas);

        if scheduler.is_enabled() && !*paused {
            scheduler.tick(now, motion, &mut self.rng);
        }

        field.update_and_render(motion.effective_speed(), canvas, *paused, &mut self.rng, surface);

        if *paused {
            surface.draw_status(&PAUSED_STATUS);
        } else if scheduler.is_enabled() && scheduler.is_slowed() {
            surface.draw_status(&SLOWED_STATUS);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
        debug!(paused = self.state.paused, "pause toggled");
    }

    pub fn set_speed(&mut self, speed: f32) -> bool {
        let applied = self.state.scheduler.set_base_speed(speed, &mut self.state.motion);
        if !applied {
            debug!(speed, "ignored speed");
        }
        applied
    }

    pub fn set_count(&mut self, count: usize) -> bool {
        if count == 0 {
            debug!("ignored zero sprite count");
            return false;
        }
        self.state.field.resize(count, &self.state.canvas, &mut self.rng);
        true
    }

    /// Only the canvas changes: sprites outside the new bounds come back in
    /// range when they are next recycled.
    pub fn set_canvas_size(&mut self, width: i32, height: i32) -> bool {
        match CanvasConfig::new(width, height) {
            Some(canvas) => {
                if canvas != self.state.canvas {
                    debug!(width, height, "canvas resized");
                }
                self.state.canvas = canvas;
                true
            }
            None => {
                debug!(width, height, "ignored canvas size");
                false
            }
        }
    }

    pub fn set_randomize_mode(&mut self, enabled: bool, now: Duration) {
        let SimulationState { motion, scheduler, .. } = &mut self.state;
        scheduler.set_enabled(enabled, now, motion, &mut self.rng);
    }

    pub fn set_randomize_max_interval(&mut self, seconds: f64, now: Duration) -> bool {
        let applied = self.state.scheduler.set_max_interval(seconds, now, &mut self.rng);
        if !applied {
            debug!(seconds, "ignored randomize interval");
        }
        applied
    }
}
