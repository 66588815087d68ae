//! The decelerating reveal sequence.
//!
//! A draw shows a series of random candidates before the winner is fixed.
//! Iteration `i` waits `base_delay + i * delay_step` and then shows one
//! uniformly sampled participant. Candidates are drawn with replacement, so a
//! name may flash several times. None of this affects who wins: the winner is
//! an independent pick made after the last step.
//!
//! The sequence is a plain iterator of [`RevealStep`] values. It knows nothing
//! about timers; the draw engine and the async driver decide how the delays
//! are waited out.

use std::time::Duration;

use crate::picker::Picker;

pub const DEFAULT_ITERATIONS: u32 = 30;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_DELAY_STEP: Duration = Duration::from_millis(10);

/// Cadence of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub iterations: u32,
    pub base_delay: Duration,
    pub delay_step: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            base_delay: DEFAULT_BASE_DELAY,
            delay_step: DEFAULT_DELAY_STEP,
        }
    }
}

impl RevealTiming {
    /// Wait before iteration `iteration` (0-based).
    #[must_use]
    pub fn delay(&self, iteration: u32) -> Duration {
        self.base_delay
            .saturating_add(self.delay_step.saturating_mul(iteration))
    }

    /// Sum of every iteration's wait.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        (0..self.iterations).fold(Duration::ZERO, |acc, i| acc.saturating_add(self.delay(i)))
    }

    /// Build the step sequence for a roster of `len` participants.
    ///
    /// Yields nothing when `len == 0`.
    pub fn sequence<P: Picker>(self, len: usize, picker: P) -> RevealSequence<P> {
        RevealSequence {
            timing: self,
            len,
            next: 0,
            picker,
        }
    }
}

/// One frame of the reveal: wait `delay`, then show `candidate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub iteration: u32,
    pub delay: Duration,
    pub candidate: usize,
}

/// Lazy iterator over [`RevealStep`]s.
#[derive(Debug)]
pub struct RevealSequence<P> {
    timing: RevealTiming,
    len: usize,
    next: u32,
    picker: P,
}

impl<P: Picker> Iterator for RevealSequence<P> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 || self.next >= self.timing.iterations {
            return None;
        }
        let iteration = self.next;
        self.next += 1;
        Some(RevealStep {
            iteration,
            delay: self.timing.delay(iteration),
            candidate: self.picker.pick(self.len),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.len == 0 {
            0
        } else {
            (self.timing.iterations - self.next) as usize
        };
        (remaining, Some(remaining))
    }
}

impl<P: Picker> ExactSizeIterator for RevealSequence<P> {}
