// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the deduction engine.
//!
//! These tests validate that the engine:
//! - Narrows the candidate placements as books are observed
//! - Solves the library from a partial set of observations
//! - Tracks dark manuscripts taken from a solved library
//! - Starts over when an observation contradicts its deductions

mod common;

use common::{at_index, books_only, mark_until_complete, truth};
use kourend_library::{
    Book, ContradictionKind, Library, Location, Placement, SlotContent, SolvedState,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn placement(sequence: usize, origin: usize) -> Placement {
    Placement { sequence, origin }
}

#[test]
fn test_three_marks_narrow_placements() {
    let mut library = Library::new();

    library.mark(at_index(&library, 0), Some(Book::DarkManuscript13516));
    assert_eq!(library.state(), SolvedState::Incomplete);
    assert_eq!(library.available_sequences(), Some(5));

    library.mark(at_index(&library, 13), Some(Book::KillingOfAKing));
    assert_eq!(
        library.placements(),
        &[placement(0, 0), placement(1, 0), placement(3, 288)]
    );

    library.mark(at_index(&library, 117), Some(Book::RadasCensus));
    assert_eq!(library.placements(), &[placement(0, 0), placement(1, 0)]);
    assert_eq!(library.state(), SolvedState::Incomplete);
}

#[test]
fn test_single_regular_book_keeps_every_sequence() {
    let mut library = Library::new();
    library.mark(at_index(&library, 100), Some(Book::RadasCensus));
    assert_eq!(library.state(), SolvedState::Incomplete);
    assert_eq!(library.available_sequences(), Some(5));
}

#[test]
fn test_books_in_index_order_solve_the_library() {
    let mut library = Library::new();
    let observations = books_only(&truth(&library, placement(0, 0)));

    let used = mark_until_complete(&mut library, &observations);

    assert_eq!(used, 13);
    assert_eq!(library.state(), SolvedState::Complete);
    assert_eq!(library.placements(), &[placement(0, 0)]);
    assert_eq!(library.available_sequences(), Some(1));
}

#[test]
fn test_solved_library_matches_truth() {
    for (sequence, origin, expected) in [(2, 100, 5), (4, 352, 2)] {
        let mut library = Library::new();
        let observations = truth(&library, placement(sequence, origin));

        let used = mark_until_complete(&mut library, &books_only(&observations));
        assert_eq!(used, expected);

        for observation in &observations {
            assert_eq!(
                library.content(observation.location),
                Some(SlotContent::observed(observation.book)),
                "bookcase {}",
                observation.location
            );
        }
        use strum::IntoEnumIterator;
        for book in Book::iter() {
            assert_eq!(library.locate(book).len(), 1, "{book}");
        }
    }
}

#[test]
fn test_locate_before_any_data_is_empty() {
    let mut library = Library::new();
    assert!(library.locate(Book::VarlamoreEnvoy).is_empty());
    library.mark(at_index(&library, 4), None);
    assert_eq!(library.state(), SolvedState::NoData);
    assert!(library.locate(Book::VarlamoreEnvoy).is_empty());
}

#[test]
fn test_invalid_location_is_ignored() {
    let mut library = Library::new();
    library.mark(at_index(&library, 0), Some(Book::DarkManuscript13516));
    let before = library.placements().to_vec();

    library.mark(Location::new(3222, 3218, 0), Some(Book::SoulJourney));

    assert_eq!(library.placements(), before.as_slice());
    assert_eq!(library.state(), SolvedState::Incomplete);
}

#[test]
fn test_taken_manuscripts_keep_library_solved() {
    let mut library = Library::new();
    let observations = books_only(&truth(&library, placement(0, 0)));
    mark_until_complete(&mut library, &observations);

    let manuscripts: Vec<(Book, Location)> = observations
        .iter()
        .filter_map(|o| o.book.filter(|b| b.is_dark_manuscript()).map(|b| (b, o.location)))
        .collect();
    assert_eq!(manuscripts.len(), 10);

    for (n, &(book, location)) in manuscripts[..9].iter().enumerate() {
        library.mark(location, None);
        assert_eq!(library.state(), SolvedState::Complete);
        assert!(!library.is_obtainable(book));
        assert_eq!(library.obtainable_manuscripts(), 10 - (n + 1));
        assert_eq!(library.content(location), Some(SlotContent::Book(book)));
    }

    // A taken manuscript put back is obtainable again.
    let (first, first_location) = manuscripts[0];
    library.mark(first_location, Some(first));
    assert!(library.is_obtainable(first));
    assert_eq!(library.obtainable_manuscripts(), 2);
    library.mark(first_location, None);
    assert_eq!(library.obtainable_manuscripts(), 1);

    // The last manuscript cannot also be missing: the arrangement changed.
    let (_, last_location) = manuscripts[9];
    library.mark(last_location, None);
    assert_eq!(library.state(), SolvedState::NoData);
    assert_eq!(library.obtainable_manuscripts(), 10);
    assert_eq!(
        library
            .statistics()
            .contradictions(ContradictionKind::MissingBook),
        1
    );
}

#[test]
fn test_manuscript_reappearing_before_solved() {
    let mut library = Library::new();
    let b13 = at_index(&library, 13);
    let b26 = at_index(&library, 26);

    library.mark(b13, Some(Book::KillingOfAKing));
    assert_eq!(
        library.placements(),
        &[
            placement(0, 0),
            placement(1, 0),
            placement(2, 249),
            placement(3, 288),
            placement(4, 314)
        ]
    );
    assert_eq!(
        library.content(b26),
        Some(SlotContent::Book(Book::DarkManuscript13520))
    );

    // Missing while still unsolved is a contradiction.
    library.mark(b26, None);
    assert_eq!(library.state(), SolvedState::NoData);

    library.mark(b13, Some(Book::KillingOfAKing));
    assert_eq!(library.available_sequences(), Some(5));
    assert_eq!(library.content(b26), Some(SlotContent::Empty));

    // The player put the manuscript back: new information, not a contradiction.
    let contradictions = library.statistics().total_contradictions();
    library.mark(b26, Some(Book::DarkManuscript13520));
    assert_eq!(library.statistics().total_contradictions(), contradictions);
    assert_eq!(library.state(), SolvedState::Incomplete);
    assert_eq!(library.available_sequences(), Some(5));
    assert_eq!(
        library.content(b13),
        Some(SlotContent::Book(Book::KillingOfAKing))
    );
    assert_eq!(
        library.content(b26),
        Some(SlotContent::Book(Book::DarkManuscript13520))
    );
}

#[test]
fn test_contradiction_restarts_from_new_observation() {
    let mut library = Library::new();
    let observations = books_only(&truth(&library, placement(0, 0)));
    mark_until_complete(&mut library, &observations);

    // The game rotated: a different book at a known bookcase.
    let location = observations[3].location;
    let replacement = if observations[3].book == Some(Book::SoulJourney) {
        Book::TwillAccord
    } else {
        Book::SoulJourney
    };
    library.mark(location, Some(replacement));

    let mut fresh = Library::new();
    fresh.mark(location, Some(replacement));
    assert_eq!(library.state(), fresh.state());
    assert_eq!(library.placements(), fresh.placements());
    for observation in &observations {
        assert_eq!(
            library.slot(observation.location),
            fresh.slot(observation.location)
        );
    }
}

#[test]
fn test_replay_is_deterministic() {
    let library = Library::new();
    let mut observations = truth(&library, placement(3, 77));
    observations.truncate(60);
    observations.shuffle(&mut StdRng::seed_from_u64(11));

    let run = || {
        let mut library = Library::new();
        kourend_library::replay::apply(&mut library, &observations);
        library
    };
    let first = run();
    let second = run();
    assert_eq!(first.state(), second.state());
    assert_eq!(first.placements(), second.placements());
    for observation in &observations {
        assert_eq!(
            first.slot(observation.location),
            second.slot(observation.location)
        );
    }
}

#[test]
fn test_reset_then_replay_reproduces_solution() {
    let mut library = Library::new();
    let mut observations = truth(&library, placement(1, 200));
    observations.shuffle(&mut StdRng::seed_from_u64(5));
    kourend_library::replay::apply(&mut library, &observations);
    assert_eq!(library.state(), SolvedState::Complete);
    let solved: Vec<_> = observations
        .iter()
        .map(|o| library.slot(o.location).cloned())
        .collect();

    library.reset();
    assert_eq!(library.state(), SolvedState::NoData);
    for observation in &observations {
        assert_eq!(
            library.content(observation.location),
            Some(SlotContent::Unknown)
        );
        assert!(library
            .slot(observation.location)
            .is_some_and(|slot| slot.possible.is_empty()));
    }

    kourend_library::replay::apply(&mut library, &observations);
    let replayed: Vec<_> = observations
        .iter()
        .map(|o| library.slot(o.location).cloned())
        .collect();
    assert_eq!(solved, replayed);
    assert_eq!(library.placements(), &[placement(1, 200)]);
}
