//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod draft;
mod reveal;
mod view_state;

pub use animation::AnimPhase;
pub use draft::DraftInput;
pub use reveal::WinnerEffect;
pub use view_state::{InputMode, UiOptions};
