//! Core domain types for Raffle.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

pub mod ui;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Participant
// ============================================================================

/// A roster entry: a name guaranteed to be trimmed and non-empty.
///
/// Equality is exact and case-sensitive, so `"alice"` and `"Alice"` are
/// distinct participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Participant(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("participant name must not be empty")]
pub struct EmptyNameError;

impl Participant {
    /// Trim `value` and wrap it, rejecting names that are empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmptyNameError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(EmptyNameError)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Participant {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Participant {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Participant> for String {
    fn from(value: Participant) -> Self {
        value.0
    }
}

impl std::ops::Deref for Participant {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Draw lifecycle
// ============================================================================

/// Observable lifecycle of the draw engine.
///
/// `Settled` behaves like `Idle` for the purpose of accepting the next draw;
/// the difference is that a winner is still on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawState {
    #[default]
    Idle,
    Running,
    Settled,
}

impl DrawState {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, DrawState::Running)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DrawState::Idle => "idle",
            DrawState::Running => "running",
            DrawState::Settled => "settled",
        }
    }
}
