//! Application state for Raffle.
//!
//! This crate contains the App state machine without TUI dependencies. The
//! TUI reads state through accessors and forwards key presses as calls to the
//! intent methods below; every draw decision is made by [`raffle_core`].

use std::time::{Duration, Instant};

use tracing::info;

pub use raffle_core::{
    DrawState, HistoryLog, HistoryRecord, Participant, Picker, Raffle, RandPicker, Rejection,
    RevealTiming, ScriptedPicker,
};
pub use raffle_types::ui::{AnimPhase, DraftInput, InputMode, UiOptions, WinnerEffect};

mod config;
pub use config::{AppConfig, ConfigError, DrawConfig, RaffleConfig, config_path};

const WINNER_EFFECT_DURATION: Duration = Duration::from_millis(1200);

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Picker type owned by the application session.
pub type SessionPicker = Box<dyn Picker>;

pub struct App {
    raffle: Raffle<SessionPicker>,
    input_mode: InputMode,
    draft: DraftInput,
    /// Highlighted roster row in Normal mode.
    selected: usize,
    status: Option<(StatusKind, String)>,
    ui_options: UiOptions,
    tick: usize,
    last_frame: Instant,
    winner_effect: Option<WinnerEffect>,
    should_quit: bool,
}

impl App {
    /// Build the app from an optional user config.
    #[must_use]
    pub fn new(config: Option<&RaffleConfig>) -> Self {
        let timing = config.map_or_else(RevealTiming::default, RaffleConfig::timing);
        let options = config.map_or_else(UiOptions::default, RaffleConfig::ui_options);
        let picker = match config.and_then(RaffleConfig::seed) {
            Some(seed) => {
                info!(seed, "Using seeded picker");
                RandPicker::seeded(seed)
            }
            None => RandPicker::from_os(),
        };
        Self::with_picker(picker, timing, options)
    }

    pub fn with_picker(
        picker: impl Picker + 'static,
        timing: RevealTiming,
        options: UiOptions,
    ) -> Self {
        Self {
            raffle: Raffle::with_timing(Box::new(picker), timing),
            input_mode: InputMode::Normal,
            draft: DraftInput::default(),
            selected: 0,
            status: None,
            ui_options: options,
            tick: 0,
            last_frame: Instant::now(),
            winner_effect: None,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Frame driving
    // ------------------------------------------------------------------

    /// Advance by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance_clock(elapsed);
    }

    /// Advance animations and any running draw by `delta`.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.tick = self.tick.wrapping_add(1);

        if let Some(effect) = self.winner_effect.as_mut() {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.winner_effect = None;
            }
        }

        if let Some(winner) = self.raffle.advance(delta) {
            self.set_status(StatusKind::Success, format!("Winner: {winner}"));
            if !self.ui_options.reduced_motion {
                self.winner_effect = Some(WinnerEffect::pulse(WINNER_EFFECT_DURATION));
            }
        }
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Switch to editing the name field. Not available during a draw.
    pub fn enter_insert_mode(&mut self) {
        if self.raffle.is_drawing() {
            self.report(&Rejection::DrawInProgress);
            return;
        }
        self.input_mode = InputMode::Insert;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Mutable access to the name field while in Insert mode.
    pub fn draft_mut(&mut self) -> Option<&mut DraftInput> {
        (self.input_mode == InputMode::Insert && !self.raffle.is_drawing())
            .then_some(&mut self.draft)
    }

    /// Add the drafted name. The field is cleared only when the add succeeds.
    pub fn submit_draft(&mut self) {
        match self.raffle.add_participant(self.draft.text()) {
            Ok(()) => {
                let added = self.draft.take();
                self.selected = self.raffle.participants().len().saturating_sub(1);
                self.set_status(StatusKind::Info, format!("Added {}", added.trim()));
            }
            Err(reason) => self.report(&reason),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.raffle.participants().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn remove_selected(&mut self) {
        match self.raffle.remove_participant(self.selected) {
            Ok(removed) => {
                let len = self.raffle.participants().len();
                self.selected = self.selected.min(len.saturating_sub(1));
                self.set_status(StatusKind::Info, format!("Removed {removed}"));
            }
            Err(reason) => self.report(&reason),
        }
    }

    pub fn clear_roster(&mut self) {
        match self.raffle.clear_roster() {
            Ok(()) => {
                self.selected = 0;
                self.winner_effect = None;
                self.set_status(StatusKind::Info, "Roster cleared");
            }
            Err(reason) => self.report(&reason),
        }
    }

    pub fn start_draw(&mut self) {
        match self.raffle.start_draw() {
            Ok(()) => {
                self.last_frame = Instant::now();
                self.winner_effect = None;
                self.input_mode = InputMode::Normal;
                self.clear_status();
            }
            Err(reason) => self.report(&reason),
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Readable state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        self.raffle.participants()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (!self.raffle.participants().is_empty()).then_some(self.selected)
    }

    #[must_use]
    pub fn draw_state(&self) -> DrawState {
        self.raffle.state()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.raffle.is_drawing()
    }

    /// Whether a draw can be started right now.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.raffle.is_drawing() && !self.raffle.participants().is_empty()
    }

    /// Candidate or winner on display; `None` before the first draw.
    #[must_use]
    pub fn display(&self) -> Option<&Participant> {
        self.raffle.display()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        self.raffle.history()
    }

    /// Fraction of reveal steps already shown, while drawing.
    #[must_use]
    pub fn reveal_progress(&self) -> Option<f64> {
        if !self.raffle.is_drawing() {
            return None;
        }
        let total = self.raffle.timing().iterations;
        if total == 0 {
            return Some(1.0);
        }
        let shown = total as usize - self.raffle.remaining_steps();
        Some(shown as f64 / f64::from(total))
    }

    /// Whether the settled winner should render highlighted this frame.
    #[must_use]
    pub fn winner_lit(&self) -> bool {
        match self.raffle.state() {
            DrawState::Settled => self.winner_effect.as_ref().is_none_or(WinnerEffect::is_lit),
            DrawState::Idle | DrawState::Running => false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn status_kind(&self) -> StatusKind {
        self.status.as_ref().map_or(StatusKind::Info, |(kind, _)| *kind)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((kind, message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn report(&mut self, reason: &Rejection) {
        self.set_status(StatusKind::Warning, capitalize(&reason.to_string()));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
