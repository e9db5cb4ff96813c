// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduction of the active placement from observations.
//!
//! # Algorithm Overview
//!
//! When a bookcase is observed:
//! 1. Check the observation against what is already known
//!    ([`check_observation`]); a conflict means earlier deductions were
//!    wrong and the caller starts over
//! 2. Pick a reference bookcase holding a known book ([`choose_reference`])
//! 3. Align each sequence so that it places that book on the reference, and
//!    keep the placements every known bookcase agrees with ([`scoring`])
//! 4. Project the survivors onto the bookcases ([`projection`]): a single
//!    survivor fills every bookcase, several survivors fill possibility sets
//!    and confirm the bookcases they all agree on
//!
//! # Dark manuscripts
//!
//! A manuscript shelf seen empty may simply mean the player holds that
//! manuscript. Once solved, such observations only update
//! [`crate::state::ManuscriptTracker`]; before that, a manuscript reappearing
//! on a shelf believed empty is treated as new information.

pub mod alignment;
pub mod errors;
pub mod projection;
pub mod scoring;

pub use alignment::Placement;
pub use errors::{Contradiction, ContradictionKind};

use crate::catalog::Book;
use crate::context::{DynamicState, MemoizedData};
use crate::state::{Counters, SlotContent, Slots, SolvedState};
use crate::topology::{Bookcase, BookcaseId, Layout};

/// What a consistent observation means for the deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing structural was learned; only manuscript availability may change.
    Redundant,
    /// The observation must be recorded and the analysis re-run.
    Informative,
}

/// Compare an observation with the current knowledge of `bookcase`.
pub fn check_observation(
    state: &DynamicState,
    bookcase: &Bookcase,
    observed: Option<Book>,
) -> Result<Verdict, Contradiction> {
    let location = bookcase.location;
    let slot = state.slots.get(bookcase.id);
    let complete = state.solved == SolvedState::Complete;

    match (slot.content, observed) {
        (SlotContent::Unknown, Some(book))
            if state.solved != SolvedState::NoData && !slot.possible.contains(&book) =>
        {
            Err(Contradiction::ImpossibleBook {
                location,
                observed: book,
            })
        }
        (SlotContent::Unknown, _) => Ok(Verdict::Informative),
        (SlotContent::Empty, None) => Ok(Verdict::Redundant),
        (SlotContent::Book(expected), Some(book)) if expected == book => Ok(Verdict::Redundant),
        (SlotContent::Book(expected), Some(book)) => Err(Contradiction::ConflictingBook {
            location,
            expected,
            observed: book,
        }),
        (SlotContent::Book(expected), None) => {
            let manuscripts = &state.manuscripts;
            let taken = complete
                && expected.is_dark_manuscript()
                && (!manuscripts.is_obtainable(expected) || manuscripts.obtainable_count() > 1);
            if taken {
                Ok(Verdict::Redundant)
            } else {
                Err(Contradiction::MissingBook {
                    location,
                    expected,
                    state: state.solved,
                })
            }
        }
        (SlotContent::Empty, Some(book)) => {
            if !complete && book.is_dark_manuscript() {
                Ok(Verdict::Informative)
            } else {
                Err(Contradiction::BookInEmptySlot {
                    location,
                    observed: book,
                    state: state.solved,
                })
            }
        }
    }
}

/// Bookcase to align the sequences on.
///
/// Bookcases owning a single index are preferred: the just-observed one if
/// it holds a book, otherwise the one with the lowest index. Duplicated
/// bookcases are only used when no other bookcase holds a known book.
pub fn choose_reference<'a>(
    layout: &'a Layout,
    slots: &Slots,
    observed: &'a Bookcase,
) -> Option<(&'a Bookcase, Book)> {
    let book_in = |b: &'a Bookcase| slots.content(b.id).book().map(|book| (b, book));

    if !observed.is_duplicated() {
        if let Some(found) = book_in(observed) {
            return Some(found);
        }
    }
    layout
        .bookcases()
        .iter()
        .filter(|b| !b.is_duplicated())
        .find_map(book_in)
        .or_else(|| book_in(observed))
        .or_else(|| layout.bookcases().iter().find_map(book_in))
}

/// Re-run the consistency analysis around `reference`, which holds `book`.
///
/// Leaves the state `Complete` when exactly one placement survives and
/// `Incomplete` otherwise. Returns the number of survivors.
pub fn analyze(
    memo: &MemoizedData,
    state: &mut DynamicState,
    reference: &Bookcase,
    book: Book,
) -> usize {
    state.slots.clear_possible();

    let placements = scoring::surviving(memo, &state.slots, reference, book);
    let available = placements.len();
    let complete = available == 1;

    state.statistics.increment_counter(Counters::Analyses);
    if complete {
        state.statistics.increment_counter(Counters::Solutions);
    }

    projection::project(memo, &mut state.slots, &placements, complete);
    projection::collapse(&mut state.slots, available);

    state.solved = if complete {
        SolvedState::Complete
    } else {
        SolvedState::Incomplete
    };
    state.placements = placements;
    available
}

/// Update manuscript availability after `id` was observed.
///
/// Only meaningful once solved, when the bookcase's content is certain.
pub fn note_manuscript(state: &mut DynamicState, id: BookcaseId, observed: Option<Book>) {
    if state.solved != SolvedState::Complete {
        return;
    }
    if let Some(manuscript) = state.slots.content(id).book().filter(|b| b.is_dark_manuscript()) {
        state
            .manuscripts
            .set_obtainable(manuscript, observed.is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Location;
    use strum::IntoEnumIterator;

    #[test]
    fn test_reference_prefers_observed_single_index() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let low = memo.layout.at_index(3);
        let observed = memo.layout.at_index(50);
        state.slots.get_mut(low.id).content = SlotContent::Book(Book::TwillAccord);
        state.slots.get_mut(observed.id).content = SlotContent::Book(Book::SoulJourney);

        let (reference, book) = choose_reference(&memo.layout, &state.slots, observed).unwrap();
        assert_eq!(reference.id, observed.id);
        assert_eq!(book, Book::SoulJourney);
    }

    #[test]
    fn test_reference_falls_back_to_lowest_index() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let low = memo.layout.at_index(3);
        let high = memo.layout.at_index(50);
        let observed = memo.layout.at_index(10);
        state.slots.get_mut(high.id).content = SlotContent::Book(Book::SoulJourney);
        state.slots.get_mut(low.id).content = SlotContent::Book(Book::TwillAccord);
        state.slots.get_mut(observed.id).content = SlotContent::Empty;

        let (reference, book) = choose_reference(&memo.layout, &state.slots, observed).unwrap();
        assert_eq!(reference.id, low.id);
        assert_eq!(book, Book::TwillAccord);
    }

    #[test]
    fn test_reference_avoids_duplicated_bookcase() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let duplicated = memo.layout.lookup(Location::new(1617, 3793, 2)).unwrap();
        let single = memo.layout.at_index(300);
        state.slots.get_mut(duplicated.id).content = SlotContent::Book(Book::RadasJourney);
        state.slots.get_mut(single.id).content = SlotContent::Book(Book::VarlamoreEnvoy);

        let (reference, _) = choose_reference(&memo.layout, &state.slots, duplicated).unwrap();
        assert_eq!(reference.id, single.id);

        state.slots.get_mut(single.id).content = SlotContent::Empty;
        let (reference, _) = choose_reference(&memo.layout, &state.slots, duplicated).unwrap();
        assert_eq!(reference.id, duplicated.id);
    }

    #[test]
    fn test_reference_none_without_books() {
        let memo = MemoizedData::new();
        let state = DynamicState::new(&memo);
        let observed = memo.layout.at_index(0);
        assert!(choose_reference(&memo.layout, &state.slots, observed).is_none());
    }

    #[test]
    fn test_check_unknown_slot_before_data() {
        let memo = MemoizedData::new();
        let state = DynamicState::new(&memo);
        let bookcase = memo.layout.at_index(0);
        assert_eq!(
            check_observation(&state, bookcase, Some(Book::SoulJourney)),
            Ok(Verdict::Informative)
        );
        assert_eq!(check_observation(&state, bookcase, None), Ok(Verdict::Informative));
    }

    #[test]
    fn test_check_conflicting_book() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let bookcase = memo.layout.at_index(0);
        state.slots.get_mut(bookcase.id).content = SlotContent::Book(Book::TwillAccord);

        assert_eq!(
            check_observation(&state, bookcase, Some(Book::TwillAccord)),
            Ok(Verdict::Redundant)
        );
        let err = check_observation(&state, bookcase, Some(Book::SoulJourney)).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::ConflictingBook);
        let err = check_observation(&state, bookcase, None).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::MissingBook);
    }

    #[test]
    fn test_check_manuscript_in_empty_slot() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let bookcase = memo.layout.at_index(0);
        state.slots.get_mut(bookcase.id).content = SlotContent::Empty;
        state.solved = SolvedState::Incomplete;

        assert_eq!(
            check_observation(&state, bookcase, Some(Book::DarkManuscript13516)),
            Ok(Verdict::Informative)
        );
        let err = check_observation(&state, bookcase, Some(Book::SoulJourney)).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::BookInEmptySlot);

        state.solved = SolvedState::Complete;
        let err = check_observation(&state, bookcase, Some(Book::DarkManuscript13516)).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::BookInEmptySlot);
    }

    #[test]
    fn test_check_taken_manuscript_once_complete() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let bookcase = memo.layout.at_index(0);
        let manuscript = Book::DarkManuscript13516;
        state.slots.get_mut(bookcase.id).content = SlotContent::Book(manuscript);
        state.solved = SolvedState::Complete;

        assert_eq!(check_observation(&state, bookcase, None), Ok(Verdict::Redundant));

        // The last obtainable manuscript cannot be missing.
        for other in Book::iter().filter(|b| b.is_dark_manuscript()) {
            if other != manuscript {
                state.manuscripts.set_obtainable(other, false);
            }
        }
        let err = check_observation(&state, bookcase, None).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::MissingBook);

        // Unless it was already known to be gone.
        state.manuscripts.set_obtainable(manuscript, false);
        assert_eq!(check_observation(&state, bookcase, None), Ok(Verdict::Redundant));
    }

    #[test]
    fn test_check_impossible_book() {
        let memo = MemoizedData::new();
        let mut state = DynamicState::new(&memo);
        let bookcase = memo.layout.at_index(0);
        state.solved = SolvedState::Incomplete;
        state.slots.get_mut(bookcase.id).possible = vec![Book::TwillAccord];

        assert_eq!(
            check_observation(&state, bookcase, Some(Book::TwillAccord)),
            Ok(Verdict::Informative)
        );
        let err = check_observation(&state, bookcase, Some(Book::SoulJourney)).unwrap_err();
        assert_eq!(err.kind(), ContradictionKind::ImpossibleBook);
    }
}
