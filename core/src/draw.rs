//! Draw lifecycle: Idle -> Running -> Settled.

use std::collections::VecDeque;
use std::time::Duration;

use raffle_types::{DrawState, Participant};
use tracing::{info, trace, warn};

use crate::errors::Rejection;
use crate::history::HistoryLog;
use crate::picker::Picker;
use crate::reveal::{RevealStep, RevealTiming};
use crate::roster::RosterStore;

#[derive(Debug)]
enum Phase {
    Idle,
    Running(RunningDraw),
    Settled,
}

#[derive(Debug)]
struct RunningDraw {
    steps: VecDeque<RevealStep>,
    /// Time accumulated towards the step at the front of `steps`.
    waited: Duration,
    roster_len: usize,
}

/// Owns the draw state and the currently displayed candidate.
///
/// The engine reads the roster but never mutates it. The caller is expected
/// to keep the roster frozen between a successful [`DrawEngine::start`] and
/// the [`DrawEngine::advance`] call that settles.
#[derive(Debug)]
pub struct DrawEngine {
    phase: Phase,
    display: Option<Participant>,
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            display: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> DrawState {
        match self.phase {
            Phase::Idle => DrawState::Idle,
            Phase::Running(_) => DrawState::Running,
            Phase::Settled => DrawState::Settled,
        }
    }

    /// Current candidate while running, the winner once settled, `None`
    /// before any draw or after the display was cleared.
    #[must_use]
    pub fn display(&self) -> Option<&Participant> {
        self.display.as_ref()
    }

    /// Time left before the next reveal step, or before settling once all
    /// steps are shown. `None` unless a draw is running.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Running(run) => Some(
                run.steps
                    .front()
                    .map_or(Duration::ZERO, |step| step.delay.saturating_sub(run.waited)),
            ),
            Phase::Idle | Phase::Settled => None,
        }
    }

    /// Reveal steps not yet shown.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        match &self.phase {
            Phase::Running(run) => run.steps.len(),
            Phase::Idle | Phase::Settled => 0,
        }
    }

    /// Enter `Running` and lay out the reveal sequence.
    ///
    /// Clears the previous winner from display.
    pub fn start<P: Picker>(
        &mut self,
        roster: &RosterStore,
        timing: RevealTiming,
        picker: &mut P,
    ) -> Result<(), Rejection> {
        if self.state().is_running() {
            return Err(Rejection::DrawInProgress);
        }
        if roster.is_empty() {
            return Err(Rejection::EmptyRoster);
        }

        let roster_len = roster.len();
        let steps: VecDeque<RevealStep> = timing.sequence(roster_len, picker).collect();
        info!(
            participants = roster_len,
            steps = steps.len(),
            "Draw started"
        );
        self.display = None;
        self.phase = Phase::Running(RunningDraw {
            steps,
            waited: Duration::ZERO,
            roster_len,
        });
        Ok(())
    }

    /// Feed `delta` of elapsed time into a running draw.
    ///
    /// Applies every step whose wait has elapsed, in order. Once the last
    /// step has been shown, makes the final independent pick, settles, and
    /// records the winner in `history`. Returns the winner on the call that
    /// settles, `None` otherwise.
    pub fn advance<P: Picker>(
        &mut self,
        delta: Duration,
        roster: &RosterStore,
        history: &mut HistoryLog,
        picker: &mut P,
    ) -> Option<Participant> {
        let Phase::Running(run) = &mut self.phase else {
            return None;
        };

        run.waited = run.waited.saturating_add(delta);
        while let Some(step) = run.steps.front().copied() {
            if run.waited < step.delay {
                return None;
            }
            run.waited -= step.delay;
            run.steps.pop_front();
            self.display = roster.get(step.candidate).cloned();
            trace!(
                iteration = step.iteration,
                candidate = step.candidate,
                "Reveal step"
            );
        }

        let winner_index = picker.pick(run.roster_len);
        let Some(winner) = roster.get(winner_index).cloned() else {
            warn!(
                index = winner_index,
                len = roster.len(),
                "Winner index outside roster; abandoning draw"
            );
            self.phase = Phase::Idle;
            self.display = None;
            return None;
        };

        info!(winner = %winner, "Draw settled");
        self.phase = Phase::Settled;
        self.display = Some(winner.clone());
        history.append(winner.clone());
        Some(winner)
    }

    /// Drop the displayed candidate. A settled engine goes back to idle.
    pub(crate) fn clear_display(&mut self) {
        self.display = None;
        if matches!(self.phase, Phase::Settled) {
            self.phase = Phase::Idle;
        }
    }
}
