use std::time::Duration;

/// Where a timed effect currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    /// Progress in `0.0..1.0`.
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.elapsed >= self.duration {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: normalized_progress(self.elapsed, self.duration),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, normalized_progress};
    use std::time::Duration;

    #[test]
    fn progress_is_clamped() {
        let total = Duration::from_millis(100);
        assert!((normalized_progress(Duration::from_millis(50), total) - 0.5).abs() < f32::EPSILON);
        assert!((normalized_progress(Duration::from_secs(5), total) - 1.0).abs() < f32::EPSILON);
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn timer_completes_after_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        assert!(matches!(timer.phase(), AnimPhase::Running { .. }));
        timer.advance(Duration::from_millis(100));
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }
}
