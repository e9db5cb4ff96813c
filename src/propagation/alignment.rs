// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotational alignment of a sequence onto the dense indices.
//!
//! A placement is a sequence plus an origin: the dense index holding the
//! sequence's first book. Book `k` then sits at `(origin + k * step) mod
//! total`, and every other index holds nothing from that sequence.

use serde::{Deserialize, Serialize};

use crate::catalog::{Book, Sequence};
use crate::context::MemoizedData;

/// One (sequence, origin) hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Index into [`MemoizedData::sequences`].
    pub sequence: usize,
    /// Dense index of the sequence's first book.
    pub origin: usize,
}

impl Placement {
    /// Placement of `sequence` that puts `book` at dense index `index`.
    ///
    /// Returns `None` if the sequence does not contain `book`.
    pub fn aligned(
        sequence: &Sequence,
        book: Book,
        index: usize,
        step: usize,
        total: usize,
    ) -> Option<Self> {
        let k = sequence.position(book)?;
        let origin = (index + total - (k * step) % total) % total;
        Some(Self {
            sequence: sequence.id(),
            origin,
        })
    }

    /// Every dense index paired with the book this placement puts there.
    ///
    /// Indices are yielded in rotation order, starting at the origin.
    pub fn walk(self, memo: &MemoizedData) -> impl Iterator<Item = (usize, Option<Book>)> {
        let total = memo.index_count();
        let step = memo.step;
        let sequence = memo.sequences[self.sequence];
        (0..total).map(move |i| ((i + self.origin) % total, predicted(&sequence, i, step)))
    }
}

/// Book a sequence places at rotation offset `i`, if any.
#[inline]
pub fn predicted(sequence: &Sequence, i: usize, step: usize) -> Option<Book> {
    if i % step == 0 {
        sequence.book_at(i / step)
    } else {
        None
    }
}
