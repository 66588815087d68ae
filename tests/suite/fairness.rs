//! Statistical checks on the final winner selection.

use raffle_core::{Raffle, RandPicker, RevealTiming};

const DRAWS: usize = 8_000;

fn tally(seed: u64, names: &[&str], timing: RevealTiming) -> Vec<usize> {
    let mut raffle = Raffle::with_timing(RandPicker::seeded(seed), timing);
    for name in names {
        raffle.add_participant(name).unwrap();
    }
    let mut counts = vec![0; names.len()];
    for _ in 0..DRAWS {
        raffle.start_draw().unwrap();
        let winner = raffle.finish_draw().unwrap();
        let index = names.iter().position(|n| *n == winner.as_str()).unwrap();
        counts[index] += 1;
    }
    counts
}

#[test]
fn win_frequencies_converge_to_one_over_n() {
    let names = ["Alice", "Bob", "Carol", "Dave"];
    let counts = tally(7, &names, RevealTiming::default());
    let expected = DRAWS as f64 / names.len() as f64;
    // Binomial sd is about 39 here; allow roughly five of them.
    for (name, count) in names.iter().zip(&counts) {
        let deviation = (*count as f64 - expected).abs();
        assert!(
            deviation < 200.0,
            "{name} won {count} of {DRAWS} draws (expected ~{expected})"
        );
    }
}

#[test]
fn reveal_length_does_not_bias_the_winner() {
    let names = ["Alice", "Bob", "Carol"];
    let short = RevealTiming {
        iterations: 1,
        ..RevealTiming::default()
    };
    let counts = tally(99, &names, short);
    let expected = DRAWS as f64 / names.len() as f64;
    for count in counts {
        assert!((count as f64 - expected).abs() < 220.0, "{count}");
    }
}

#[test]
fn same_seed_replays_the_same_winners() {
    let names = ["Alice", "Bob", "Carol", "Dave", "Eve"];
    let run = |seed| {
        let mut raffle = Raffle::new(RandPicker::seeded(seed));
        for name in names {
            raffle.add_participant(name).unwrap();
        }
        (0..20)
            .map(|_| {
                raffle.start_draw().unwrap();
                raffle.finish_draw().unwrap()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}
