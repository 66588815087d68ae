//! One raffle: roster, draw engine, history and the randomness they share.

use std::time::Duration;

use raffle_types::{DrawState, Participant};
use tracing::debug;

use crate::draw::DrawEngine;
use crate::errors::Rejection;
use crate::history::{HistoryLog, HistoryRecord};
use crate::picker::{Picker, RandPicker};
use crate::reveal::RevealTiming;
use crate::roster::RosterStore;

/// An explicitly owned raffle session.
///
/// Every operation that cannot apply returns a [`Rejection`] and leaves the
/// session untouched. Sessions share nothing, so any number can coexist.
#[derive(Debug)]
pub struct Raffle<P = RandPicker> {
    roster: RosterStore,
    engine: DrawEngine,
    history: HistoryLog,
    picker: P,
    timing: RevealTiming,
}

impl Default for Raffle<RandPicker> {
    fn default() -> Self {
        Self::new(RandPicker::from_os())
    }
}

impl<P: Picker> Raffle<P> {
    pub fn new(picker: P) -> Self {
        Self::with_timing(picker, RevealTiming::default())
    }

    pub fn with_timing(picker: P, timing: RevealTiming) -> Self {
        Self {
            roster: RosterStore::new(),
            engine: DrawEngine::new(),
            history: HistoryLog::new(),
            picker,
            timing,
        }
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    pub fn add_participant(&mut self, name: &str) -> Result<(), Rejection> {
        let result = self.roster.add(name).map(|added| {
            debug!(name = %added, "Participant added");
        });
        noted("add", result)
    }

    pub fn remove_participant(&mut self, index: usize) -> Result<Participant, Rejection> {
        let result = self.roster.remove(index);
        if let Ok(removed) = &result {
            debug!(name = %removed, index, "Participant removed");
        }
        noted("remove", result)
    }

    /// Empty the roster and clear the displayed winner.
    pub fn clear_roster(&mut self) -> Result<(), Rejection> {
        let result = self.roster.clear();
        if result.is_ok() {
            self.engine.clear_display();
            debug!("Roster cleared");
        }
        noted("clear", result)
    }

    /// Begin a draw. The roster is frozen until it settles.
    pub fn start_draw(&mut self) -> Result<(), Rejection> {
        let result = self
            .engine
            .start(&self.roster, self.timing, &mut self.picker);
        if result.is_ok() {
            self.roster.freeze();
        }
        noted("start_draw", result)
    }

    /// Feed elapsed time to a running draw. Returns the winner on the call
    /// that settles it.
    pub fn advance(&mut self, delta: Duration) -> Option<Participant> {
        let settled = self.engine.advance(
            delta,
            &self.roster,
            &mut self.history,
            &mut self.picker,
        );
        if !self.engine.state().is_running() {
            self.roster.thaw();
        }
        settled
    }

    /// Run the rest of the current draw without waiting.
    pub fn finish_draw(&mut self) -> Option<Participant> {
        while let Some(delay) = self.engine.pending_delay() {
            if let Some(winner) = self.advance(delay) {
                return Some(winner);
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Readable state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        self.roster.participants()
    }

    #[must_use]
    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    #[must_use]
    pub fn state(&self) -> DrawState {
        self.engine.state()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.engine.state().is_running()
    }

    /// Candidate or winner on display; `None` means "no winner yet".
    #[must_use]
    pub fn display(&self) -> Option<&Participant> {
        self.engine.display()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn last_winner(&self) -> Option<&HistoryRecord> {
        self.history.latest()
    }

    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.engine.pending_delay()
    }

    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.engine.remaining_steps()
    }

    #[must_use]
    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    #[must_use]
    pub fn picker(&self) -> &P {
        &self.picker
    }
}

fn noted<T>(op: &'static str, result: Result<T, Rejection>) -> Result<T, Rejection> {
    if let Err(reason) = &result {
        debug!(op, %reason, "Operation rejected");
    }
    result
}
