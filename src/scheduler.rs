use std::time::Duration;
use rand::Rng;
use tracing::{debug, warn};
use crate::constants::*;
use crate::state::SchedulerPhase;

/// Speed set by the operator and the speed applied to sprites this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    base_speed: f32,
    effective_speed: f32,
}

impl MotionState {
    pub fn new(base_speed: f32) -> Self {
        Self { base_speed, effective_speed: base_speed }
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn effective_speed(&self) -> f32 {
        self.effective_speed
    }

    fn apply_phase(&mut self, phase: SchedulerPhase) {
        self.effective_speed = match phase {
            SchedulerPhase::Normal => self.base_speed,
            SchedulerPhase::Slowed => self.base_speed / SLOW_DIVISOR,
        };
    }
}

/// Randomize mode: flips between normal and slowed speed after random
/// intervals of at most `max_interval` seconds.
#[derive(Debug, Clone)]
pub struct RandomizeScheduler {
    enabled: bool,
    max_interval: f64,
    phase: SchedulerPhase,
    next_fire: Duration,
}

impl RandomizeScheduler {
    pub fn new<R: Rng>(enabled: bool, max_interval: f64, now: Duration, rng: &mut R) -> Self {
        let max_interval = if is_valid_interval(max_interval) {
            max_interval
        } else {
            warn!(max_interval, "invalid randomize interval, using default");
            DEFAULT_RANDOMIZE_N
        };
        let mut scheduler = Self {
            enabled,
            max_interval,
            phase: SchedulerPhase::Normal,
            next_fire: now,
        };
        scheduler.reseed(now, rng);
        scheduler
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_slowed(&self) -> bool {
        self.phase == SchedulerPhase::Slowed
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    pub fn max_interval(&self) -> f64 {
        self.max_interval
    }

    pub fn next_fire(&self) -> Duration {
        self.next_fire
    }

    /// Flips the phase once the current one has run out. Returns true on a flip.
    pub fn tick<R: Rng>(&mut self, now: Duration, motion: &mut MotionState, rng: &mut R) -> bool {
        if !self.enabled || now < self.next_fire {
            return false;
        }

        self.phase = self.phase.flipped();
        motion.apply_phase(self.phase);
        self.reseed(now, rng);
        debug!(phase = ?self.phase, speed = motion.effective_speed, "randomize mode flipped");
        true
    }

    /// Both directions restart in the normal phase at full speed.
    pub fn set_enabled<R: Rng>(&mut self, enabled: bool, now: Duration, motion: &mut MotionState, rng: &mut R) {
        self.enabled = enabled;
        self.phase = SchedulerPhase::Normal;
        motion.apply_phase(self.phase);
        if enabled {
            self.reseed(now, rng);
        }
    }

    /// Ignores non-finite or non-positive values. The countdown restarts so a
    /// shorter interval applies right away.
    pub fn set_max_interval<R: Rng>(&mut self, seconds: f64, now: Duration, rng: &mut R) -> bool {
        if !is_valid_interval(seconds) {
            return false;
        }
        self.max_interval = seconds;
        self.reseed(now, rng);
        true
    }

    /// Ignores non-finite or non-positive values. The new speed applies at once,
    /// scaled down if the slowed phase is running.
    pub fn set_base_speed(&self, speed: f32, motion: &mut MotionState) -> bool {
        if !speed.is_finite() || speed <= 0.0 {
            return false;
        }
        motion.base_speed = speed;
        motion.apply_phase(self.phase);
        true
    }

    /// Intervals too long for a `Duration` saturate, so the phase never flips.
    fn reseed<R: Rng>(&mut self, now: Duration, rng: &mut R) {
        let seconds = rng.random::<f64>() * self.max_interval;
        let wait = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
        self.next_fire = now.saturating_add(wait);
    }
}

fn is_valid_interval(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

#[cfg(test)]
impl RandomizeScheduler {
    pub(crate) fn force_phase(&mut self, phase: SchedulerPhase, motion: &mut MotionState) {
        self.phase = phase;
        motion.apply_phase(phase);
    }
}
