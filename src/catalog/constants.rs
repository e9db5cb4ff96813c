// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the library catalog.
//!
//! Counts that depend on the physical layout (number of dense indices, the
//! step between books) are derived from the coordinate table at
//! construction time, see [`crate::topology::Layout`].

use strum::EnumCount;

use super::Book;

/// Number of distinct books, and the length of every sequence.
pub const NBOOKS: usize = Book::COUNT;

/// Number of dark manuscripts among the books.
pub const NDARK_MANUSCRIPTS: usize = 10;

/// Number of candidate book sequences the game chooses between.
pub const NSEQUENCES: usize = 5;

const _: () = assert!(NBOOKS == 26, "the library holds 26 distinct books");

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_manuscript_count_matches_catalog() {
        let manuscripts = Book::iter().filter(|b| b.is_dark_manuscript()).count();
        assert_eq!(manuscripts, NDARK_MANUSCRIPTS);
    }

    #[test]
    fn test_regular_book_count() {
        let regular = Book::iter().filter(|b| !b.is_dark_manuscript()).count();
        assert_eq!(regular, NBOOKS - NDARK_MANUSCRIPTS);
    }
}
