// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consistency scoring of candidate placements.
//!
//! A placement survives if every known bookcase agrees with it:
//! - where it predicts a book, the bookcase holds that book, or is empty and
//!   the predicted book is a dark manuscript (someone may have taken it)
//! - where it predicts nothing, the bookcase holds no book
//!
//! The second rule has one exception. A duplicated bookcase owns two indices,
//! so under a given placement it can legitimately hold a book at one index
//! and be walked again at the other. The first such appearance outside the
//! predicted positions is excused; a second one is not.

use crate::catalog::Book;
use crate::context::MemoizedData;
use crate::state::{SlotContent, Slots};
use crate::topology::{Bookcase, BookcaseId};

use super::alignment::Placement;

/// Number of predicted positions confirmed by a known bookcase, or 0 if any
/// known bookcase contradicts the placement.
pub fn score(memo: &MemoizedData, slots: &Slots, placement: Placement) -> usize {
    let mut excused: Vec<BookcaseId> = Vec::new();
    let mut found = 0;

    for (index, predicted) in placement.walk(memo) {
        let bookcase = memo.layout.at_index(index);
        let content = slots.content(bookcase.id);
        match predicted {
            Some(expected) => {
                if !content.is_known() {
                    continue;
                }
                let agrees = content == SlotContent::Book(expected)
                    || (expected.is_dark_manuscript() && content == SlotContent::Empty);
                if !agrees {
                    return 0;
                }
                found += 1;
            }
            None => {
                if content.book().is_none() {
                    continue;
                }
                if !bookcase.is_duplicated() || excused.contains(&bookcase.id) {
                    return 0;
                }
                excused.push(bookcase.id);
            }
        }
    }
    found
}

/// Placements consistent with every known bookcase, aligned so that
/// `reference` holds `book`.
///
/// One placement per sequence per index the reference owns, in that order.
pub fn surviving(
    memo: &MemoizedData,
    slots: &Slots,
    reference: &Bookcase,
    book: Book,
) -> Vec<Placement> {
    let total = memo.index_count();
    let mut survivors = Vec::new();

    for &index in &reference.indices {
        for sequence in &memo.sequences {
            let Some(placement) = Placement::aligned(sequence, book, index, memo.step, total)
            else {
                continue;
            };
            let score = score(memo, slots, placement);
            tracing::trace!(
                sequence = placement.sequence,
                origin = placement.origin,
                score,
                "scored placement"
            );
            if score > 0 {
                survivors.push(placement);
            }
        }
    }
    survivors
}
