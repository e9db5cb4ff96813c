// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable deduction state (Tier 2: DYNAMIC).

use crate::catalog::{Book, Customer};
use crate::propagation::Placement;
use crate::state::{ManuscriptTracker, Slots, SolvedState, Statistics};

use super::MemoizedData;

/// Mutable deduction state (Tier 2: DYNAMIC).
///
/// Rebuilt from fresh observations each session; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Per-bookcase knowledge, indexed by bookcase id.
    pub slots: Slots,

    /// Which dark manuscripts may still be on their shelf.
    pub manuscripts: ManuscriptTracker,

    pub solved: SolvedState,

    /// Placements that survived the last analysis pass.
    pub placements: Vec<Placement>,

    /// The customer currently asking for a book, and the book.
    pub customer: Option<(Customer, Book)>,

    pub statistics: Statistics,
}

impl DynamicState {
    /// Create initial dynamic state from MEMO data.
    pub fn new(memo: &MemoizedData) -> Self {
        Self {
            slots: Slots::new(memo.layout.bookcases().len()),
            manuscripts: ManuscriptTracker::new(),
            solved: SolvedState::NoData,
            placements: Vec::new(),
            customer: None,
            statistics: Statistics::new(),
        }
    }

    /// Forget all deductions. The active customer and statistics survive.
    pub fn reset(&mut self) {
        self.solved = SolvedState::NoData;
        self.placements.clear();
        self.slots.reset();
        self.manuscripts.reset();
    }
}
