// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The deduction engine.
//!
//! [`Library`] is the single owner of the deduction state. It is built
//! explicitly by the caller, mutated only through [`Library::mark`] and
//! [`Library::reset`], and queried through read-only accessors. Each call
//! runs to completion synchronously; no partially analysed state is ever
//! visible. [`SharedLibrary`] wraps an engine for callers that observe and
//! query from several threads.
//!
//! # Example
//!
//! ```
//! use kourend_library::catalog::Book;
//! use kourend_library::state::SolvedState;
//! use kourend_library::topology::Location;
//! use kourend_library::Library;
//!
//! let mut library = Library::new();
//! assert!(library.locate(Book::SoulJourney).is_empty());
//!
//! library.mark(Location::new(1626, 3795, 0), Some(Book::RadasCensus));
//! assert_eq!(library.state(), SolvedState::Incomplete);
//! assert_eq!(library.available_sequences(), Some(5));
//! assert!(!library.locate(Book::SoulJourney).is_empty());
//! ```

pub mod shared;

pub use shared::SharedLibrary;

use crate::catalog::{Book, Customer};
use crate::context::{DynamicState, MemoizedData};
use crate::propagation::{self, Placement, Verdict};
use crate::state::{Counters, SlotContent, SlotState, SolvedState, Statistics};
use crate::topology::{Bookcase, Location};

/// Deduction engine for one library session.
#[derive(Debug, Clone)]
pub struct Library {
    memo: MemoizedData,
    state: DynamicState,
}

impl Library {
    /// Create an engine over the standard library data.
    pub fn new() -> Self {
        Self::with_memo(MemoizedData::new())
    }

    /// Create an engine over existing MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        let state = DynamicState::new(&memo);
        Self { memo, state }
    }

    pub fn memo(&self) -> &MemoizedData {
        &self.memo
    }

    /// Forget every observation and deduction.
    ///
    /// The active customer is kept: it is not part of the deduction.
    pub fn reset(&mut self) {
        tracing::debug!("library reset");
        self.state.statistics.increment_counter(Counters::Resets);
        self.state.reset();
    }

    /// Record that the bookcase at `location` was seen holding `observed`
    /// (`None` for an empty shelf), and update every deduction.
    ///
    /// Locations outside the library are ignored. An observation that
    /// contradicts earlier deductions discards them and restarts from this
    /// observation alone.
    pub fn mark(&mut self, location: Location, observed: Option<Book>) {
        self.state.statistics.increment_counter(Counters::Observations);

        let Some(bookcase) = self.memo.layout.lookup(location) else {
            tracing::debug!(%location, "ignoring observation outside the library");
            self.state
                .statistics
                .increment_counter(Counters::IgnoredObservations);
            return;
        };

        match propagation::check_observation(&self.state, bookcase, observed) {
            Ok(Verdict::Redundant) => {
                propagation::note_manuscript(&mut self.state, bookcase.id, observed);
                return;
            }
            Ok(Verdict::Informative) => {}
            Err(contradiction) => {
                tracing::debug!(%contradiction, "starting over");
                self.state
                    .statistics
                    .increment_contradiction(contradiction.kind());
                self.state.reset();
            }
        }

        let previous = self.state.solved;
        self.state.slots.get_mut(bookcase.id).content = SlotContent::observed(observed);

        // An empty shelf says nothing until some book has been seen.
        if observed.is_none() && self.state.solved == SolvedState::NoData {
            return;
        }

        let Some((reference, book)) =
            propagation::choose_reference(&self.memo.layout, &self.state.slots, bookcase)
        else {
            return;
        };
        let available = propagation::analyze(&self.memo, &mut self.state, reference, book);
        propagation::note_manuscript(&mut self.state, bookcase.id, observed);

        if previous != self.state.solved {
            tracing::debug!(
                from = %previous,
                to = %self.state.solved,
                available,
                "library state changed"
            );
        }
    }

    /// Set the customer currently asking for `book`.
    pub fn set_customer(&mut self, customer: Customer, book: Book) {
        self.state.customer = Some((customer, book));
    }

    pub fn clear_customer(&mut self) {
        self.state.customer = None;
    }

    pub fn customer(&self) -> Option<(Customer, Book)> {
        self.state.customer
    }

    pub fn state(&self) -> SolvedState {
        self.state.solved
    }

    /// Number of placements still consistent with the observations, or
    /// `None` before any book has been seen.
    pub fn available_sequences(&self) -> Option<usize> {
        match self.state.solved {
            SolvedState::NoData => None,
            _ => Some(self.state.placements.len()),
        }
    }

    /// Placements still consistent with the observations.
    pub fn placements(&self) -> &[Placement] {
        &self.state.placements
    }

    /// Whether `book` may still be on its shelf. Always true for regular
    /// books.
    pub fn is_obtainable(&self, book: Book) -> bool {
        self.state.manuscripts.is_obtainable(book)
    }

    /// Number of dark manuscripts not yet found missing.
    pub fn obtainable_manuscripts(&self) -> usize {
        self.state.manuscripts.obtainable_count()
    }

    /// Static metadata of the bookcase at `location`.
    pub fn bookcase(&self, location: Location) -> Option<&Bookcase> {
        self.memo.layout.lookup(location)
    }

    /// Current knowledge of the bookcase at `location`.
    pub fn slot(&self, location: Location) -> Option<&SlotState> {
        self.bookcase(location)
            .map(|bookcase| self.state.slots.get(bookcase.id))
    }

    pub fn content(&self, location: Location) -> Option<SlotContent> {
        self.slot(location).map(|slot| slot.content)
    }

    /// Every bookcase that holds or may hold `book`, ordered by dense index.
    ///
    /// Empty before any deduction; a single location once the book's
    /// position is certain.
    pub fn locate(&self, book: Book) -> Vec<Location> {
        self.memo
            .layout
            .bookcases()
            .iter()
            .filter(|bookcase| {
                let slot = self.state.slots.get(bookcase.id);
                match slot.content {
                    SlotContent::Book(b) => b == book,
                    SlotContent::Unknown => slot.possible.contains(&book),
                    SlotContent::Empty => false,
                }
            })
            .map(|bookcase| bookcase.location)
            .collect()
    }

    /// [`Library::locate`] for the book the active customer wants.
    pub fn customer_locations(&self) -> Vec<Location> {
        self.state
            .customer
            .map_or_else(Vec::new, |(_, book)| self.locate(book))
    }

    /// Human readable position of a bookcase, e.g. "Center room, Top floor".
    pub fn describe(&self, location: Location) -> Option<String> {
        self.bookcase(location)
            .map(|bookcase| self.memo.layout.describe(bookcase))
    }

    pub fn statistics(&self) -> &Statistics {
        &self.state.statistics
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
