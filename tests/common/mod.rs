//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};

use raffle_engine::{App, RevealTiming, ScriptedPicker, UiOptions};

/// Short reveal so frame-driven tests settle in a handful of ticks.
pub fn fast_timing() -> RevealTiming {
    RevealTiming {
        iterations: 5,
        base_delay: Duration::from_millis(10),
        delay_step: Duration::from_millis(5),
    }
}

/// App with a scripted picker and the given names already on the roster.
pub fn app_with(names: &[&str], script: &[usize]) -> App {
    app_with_options(names, script, UiOptions::default())
}

pub fn app_with_options(names: &[&str], script: &[usize], options: UiOptions) -> App {
    let mut app = App::with_picker(
        ScriptedPicker::new(script.iter().copied()),
        fast_timing(),
        options,
    );
    app.enter_insert_mode();
    for name in names {
        app.draft_mut()
            .expect("insert mode is available before a draw")
            .insert_str(name);
        app.submit_draft();
    }
    app.enter_normal_mode();
    app.clear_status();
    app
}

/// Tick the app in 8ms frames until the running draw settles.
pub fn settle(app: &mut App) {
    for _ in 0..10_000 {
        if !app.is_drawing() {
            return;
        }
        app.advance_clock(Duration::from_millis(8));
    }
    panic!("draw did not settle");
}

/// Render one frame into a test buffer and return its rows as text.
pub fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| raffle_tui::draw(frame, app))
        .expect("draw frame");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}
