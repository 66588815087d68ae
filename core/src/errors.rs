//! Why an operation was turned into a no-op.

use thiserror::Error;

/// Reason an operation was rejected.
///
/// A rejected operation never changes state. Callers are free to ignore the
/// value; the TUI surfaces it on the status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("name is empty")]
    EmptyName,
    #[error("{name} is already on the roster")]
    DuplicateName { name: String },
    #[error("no participant at position {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a draw is in progress")]
    DrawInProgress,
    #[error("the roster is empty")]
    EmptyRoster,
}
