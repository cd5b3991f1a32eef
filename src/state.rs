#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SchedulerPhase {
    #[default]
    Normal, // Sprites fly at the base speed
    Slowed, // Sprites fly at base speed / SLOW_DIVISOR
}

impl SchedulerPhase {
    pub fn flipped(self) -> Self {
        match self {
            SchedulerPhase::Normal => SchedulerPhase::Slowed,
            SchedulerPhase::Slowed => SchedulerPhase::Normal,
        }
    }
}
