//! Newest-first log of settled draws.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use raffle_types::Participant;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A settled draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    winner: Participant,
    drawn_at: DateTime<Local>,
}

impl HistoryRecord {
    #[must_use]
    pub fn winner(&self) -> &Participant {
        &self.winner
    }

    #[must_use]
    pub fn drawn_at(&self) -> DateTime<Local> {
        self.drawn_at
    }

    /// Human-readable local time of the settle.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.drawn_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only, unbounded. The same winner may appear any number of times.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: VecDeque<HistoryRecord>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `winner` as drawn now.
    pub fn append(&mut self, winner: Participant) -> &HistoryRecord {
        self.append_at(winner, Local::now())
    }

    pub fn append_at(&mut self, winner: Participant, drawn_at: DateTime<Local>) -> &HistoryRecord {
        self.records.push_front(HistoryRecord { winner, drawn_at });
        &self.records[0]
    }

    /// Records, newest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &HistoryRecord> + '_ {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
