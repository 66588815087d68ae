//! End-to-end draw flows through the session and the app.

use std::time::Duration;

use raffle_core::{DrawState, Raffle, RandPicker, Rejection, ScriptedPicker, run_draw};
use tokio::time::Instant;

use crate::common::{app_with, settle};

fn names(raffle: &Raffle<impl raffle_core::Picker>) -> Vec<&str> {
    raffle.participants().iter().map(|p| p.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn three_names_draw_to_a_recorded_winner() {
    let mut raffle = Raffle::new(RandPicker::seeded(2024));
    for name in ["Alice", "Bob", "Carol"] {
        raffle.add_participant(name).unwrap();
    }

    let started = Instant::now();
    let winner = run_draw(&mut raffle).await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(5850));
    assert_eq!(raffle.state(), DrawState::Settled);
    assert!(["Alice", "Bob", "Carol"].contains(&winner.as_str()));
    assert_eq!(raffle.display(), Some(&winner));
    assert_eq!(raffle.history().len(), 1);
    assert_eq!(raffle.history().latest().unwrap().winner(), &winner);
    assert_eq!(names(&raffle), ["Alice", "Bob", "Carol"]);
}

#[test]
fn roster_is_frozen_until_the_draw_settles() {
    let mut raffle = Raffle::new(ScriptedPicker::constant(1));
    raffle.add_participant("Alice").unwrap();
    raffle.add_participant("Bob").unwrap();
    raffle.start_draw().unwrap();

    raffle.advance(Duration::from_millis(120));
    assert!(raffle.is_drawing());

    assert_eq!(raffle.add_participant("Carol"), Err(Rejection::DrawInProgress));
    assert_eq!(raffle.remove_participant(0), Err(Rejection::DrawInProgress));
    assert_eq!(raffle.clear_roster(), Err(Rejection::DrawInProgress));
    assert_eq!(raffle.start_draw(), Err(Rejection::DrawInProgress));
    assert_eq!(names(&raffle), ["Alice", "Bob"]);

    let winner = raffle.finish_draw().unwrap();
    assert_eq!(winner.as_str(), "Bob");
    raffle.add_participant("Carol").unwrap();
    assert_eq!(names(&raffle), ["Alice", "Bob", "Carol"]);
}

#[tokio::test(start_paused = true)]
async fn empty_roster_never_leaves_idle() {
    let mut raffle = Raffle::new(RandPicker::seeded(1));
    assert_eq!(run_draw(&mut raffle).await, Err(Rejection::EmptyRoster));
    assert_eq!(raffle.state(), DrawState::Idle);
    assert!(raffle.display().is_none());
    assert!(raffle.history().is_empty());
}

#[test]
fn roster_edits_keep_names_unique_and_ordered() {
    let mut raffle = Raffle::new(ScriptedPicker::constant(0));
    let inputs = [
        "Alice", " Bob", "Alice ", "", "   ", "Carol", "bob", "\tDave\n", "Carol",
    ];
    let mut expected_len = 0;
    for input in inputs {
        let before = raffle.participants().len();
        let result = raffle.add_participant(input);
        let trimmed = input.trim();
        let fresh = !trimmed.is_empty() && !names(&raffle).contains(&trimmed);
        assert_eq!(result.is_ok(), fresh, "add({input:?})");
        if fresh {
            expected_len += 1;
            assert_eq!(raffle.participants().last().unwrap().as_str(), trimmed);
        } else {
            assert_eq!(raffle.participants().len(), before);
        }
    }
    assert_eq!(raffle.participants().len(), expected_len);
    assert_eq!(names(&raffle), ["Alice", "Bob", "Carol", "bob", "Dave"]);

    raffle.remove_participant(1).unwrap();
    assert_eq!(names(&raffle), ["Alice", "Carol", "bob", "Dave"]);
    assert_eq!(
        raffle.remove_participant(9),
        Err(Rejection::IndexOutOfRange { index: 9, len: 4 })
    );
    assert_eq!(names(&raffle), ["Alice", "Carol", "bob", "Dave"]);
}

#[test]
fn clear_after_draw_empties_roster_and_hides_winner() {
    let mut raffle = Raffle::new(ScriptedPicker::constant(0));
    raffle.add_participant("Alice").unwrap();
    raffle.start_draw().unwrap();
    raffle.finish_draw().unwrap();
    assert!(raffle.display().is_some());

    raffle.clear_roster().unwrap();
    assert!(raffle.participants().is_empty());
    assert!(raffle.display().is_none());
    assert_eq!(raffle.state(), DrawState::Idle);
    assert_eq!(raffle.history().len(), 1);
}

#[test]
fn history_lists_newest_first_across_draws() {
    // Each draw uses five reveal picks then the winner.
    let script = [0, 0, 0, 0, 0, 2, 1, 1, 1, 1, 1, 0];
    let mut app = app_with(&["Alice", "Bob", "Carol"], &script);

    app.start_draw();
    settle(&mut app);
    app.start_draw();
    settle(&mut app);

    let winners: Vec<&str> = app
        .history()
        .records()
        .map(|record| record.winner().as_str())
        .collect();
    assert_eq!(winners, ["Alice", "Carol"]);
}

#[test]
fn app_ignores_edits_while_drawing() {
    let mut app = app_with(&["Alice", "Bob", "Carol"], &[]);
    app.start_draw();
    app.advance_clock(Duration::from_millis(10));

    app.enter_insert_mode();
    app.clear_roster();
    app.remove_selected();
    assert_eq!(app.participants().len(), 3);
    assert_eq!(app.draw_state(), DrawState::Running);

    settle(&mut app);
    assert_eq!(app.draw_state(), DrawState::Settled);
    assert!(app.participants().contains(app.display().unwrap()));
}
