//! Draw engine for Raffle.
//!
//! A [`Raffle`] session owns three pieces of state:
//!
//! - [`RosterStore`]: the ordered, duplicate-free participant list
//! - [`DrawEngine`]: the Idle -> Running -> Settled lifecycle and the
//!   candidate on display
//! - [`HistoryLog`]: settled draws, newest first
//!
//! Randomness comes from a [`Picker`], so tests can script exact outcomes.
//! The reveal animation is a pure [`RevealSequence`] of delays and candidate
//! indices; the session consumes it through [`Raffle::advance`] (frame-driven)
//! or [`run_draw`] (tokio timers).

mod draw;
mod driver;
mod errors;
mod history;
mod picker;
mod reveal;
mod roster;
mod session;

pub use draw::DrawEngine;
pub use driver::run_draw;
pub use errors::Rejection;
pub use history::{HistoryLog, HistoryRecord};
pub use picker::{Picker, RandPicker, ScriptedPicker};
pub use raffle_types::{DrawState, EmptyNameError, Participant};
pub use reveal::{
    DEFAULT_BASE_DELAY, DEFAULT_DELAY_STEP, DEFAULT_ITERATIONS, RevealSequence, RevealStep,
    RevealTiming,
};
pub use roster::RosterStore;
pub use session::Raffle;
