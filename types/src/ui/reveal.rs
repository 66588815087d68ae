//! Highlight pulse shown when a winner is announced.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone)]
pub struct WinnerEffect {
    timer: EffectTimer,
}

impl WinnerEffect {
    #[must_use]
    pub fn pulse(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Whether the highlight is in its "on" half-cycle. Blinks four times over
    /// the effect duration, then stays on.
    #[must_use]
    pub fn is_lit(&self) -> bool {
        match self.phase() {
            AnimPhase::Running { progress } => ((progress * 8.0) as u32).is_multiple_of(2),
            AnimPhase::Completed => true,
        }
    }
}
