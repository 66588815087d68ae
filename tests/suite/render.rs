//! Frame rendering checks against ratatui's test backend.

use std::time::Duration;

use raffle_engine::UiOptions;
use raffle_tui::NO_DRAW_YET;

use crate::common::{app_with, app_with_options, render, screen_contains, settle};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

#[test]
fn empty_app_shows_sentinel_and_no_history() {
    let app = app_with(&[], &[]);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, NO_DRAW_YET));
    assert!(screen_contains(&screen, "Participants (0)"));
    assert!(!screen_contains(&screen, "History"));
}

#[test]
fn roster_panel_lists_names_with_count() {
    let app = app_with(&["Alice", "Bob", "Carol"], &[]);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Participants (3)"));
    for name in ["Alice", "Bob", "Carol"] {
        assert!(screen_contains(&screen, name), "{name} missing:\n{}", screen.join("\n"));
    }
    assert!(screen_contains(&screen, "3 participants"));
}

#[test]
fn running_draw_shows_drawing_label_and_candidate() {
    let mut app = app_with(&["Alice", "Bob"], &[1]);
    app.start_draw();
    app.advance_clock(Duration::from_millis(10));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Drawing..."));
    assert!(screen_contains(&screen, "DRAWING"));
    assert!(!screen_contains(&screen, NO_DRAW_YET));
}

#[test]
fn settled_draw_shows_winner_and_history() {
    let mut app = app_with(&["Alice", "Bob", "Carol"], &[0, 0, 0, 0, 0, 2]);
    app.start_draw();
    settle(&mut app);

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Winner: Carol"));
    assert!(screen_contains(&screen, "History (1)"));
    let record = app.history().latest().unwrap();
    assert!(screen_contains(&screen, &record.timestamp()));
    assert!(!screen_contains(&screen, "Drawing..."));
}

#[test]
fn rejection_is_reported_on_status_line() {
    let mut app = app_with(&["Alice"], &[]);
    app.enter_insert_mode();
    app.draft_mut().unwrap().insert_str("Alice");
    app.submit_draft();
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(
        &screen,
        "Warning: Alice is already on the roster"
    ));
}

#[test]
fn ascii_mode_uses_ascii_markers() {
    let options = UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    };
    let app = app_with_options(&["Alice", "Bob"], &[], options);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "> * Bob"));
    assert!(!screen_contains(&screen, "▸"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app_with(&["Alice", "Bob"], &[]);
    app.start_draw();
    settle(&mut app);
    for (width, height) in [(1, 1), (10, 4), (20, 8)] {
        let _ = render(&app, width, height);
    }
}
