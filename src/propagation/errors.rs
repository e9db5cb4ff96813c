// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contradictions between a new observation and what was already known.
//!
//! A contradiction is never surfaced to callers: the engine logs it, counts
//! it, forgets everything and restarts from the contradicting observation.

use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter};
use thiserror::Error;

use crate::catalog::Book;
use crate::state::SolvedState;
use crate::topology::Location;

/// Ways an observation can conflict with prior knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ContradictionKind))]
#[strum_discriminants(derive(EnumCountMacro, EnumIter, Hash))]
pub enum Contradiction {
    /// A bookcase known to hold one book was seen holding another.
    #[error("bookcase {location} holds {observed}, expected {expected}")]
    ConflictingBook {
        location: Location,
        expected: Book,
        observed: Book,
    },

    /// A bookcase known to hold a book was seen empty, and the book is not
    /// a manuscript that could have been taken.
    #[error("bookcase {location} is empty, expected {expected} ({state})")]
    MissingBook {
        location: Location,
        expected: Book,
        state: SolvedState,
    },

    /// A bookcase known to be empty was seen holding a book.
    #[error("bookcase {location} holds {observed}, expected it to be empty ({state})")]
    BookInEmptySlot {
        location: Location,
        observed: Book,
        state: SolvedState,
    },

    /// A book was seen where no consistent placement can put it.
    #[error("bookcase {location} holds {observed}, which no remaining sequence places there")]
    ImpossibleBook { location: Location, observed: Book },
}

impl Contradiction {
    pub fn kind(&self) -> ContradictionKind {
        ContradictionKind::from(self)
    }
}
