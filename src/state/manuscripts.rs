// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dark manuscript availability.
//!
//! A player can only hold one dark manuscript at a time, and taking one from
//! a shelf looks exactly like finding the shelf empty. Once the arrangement
//! is solved, the tracker records which manuscripts have been found missing
//! so that an empty manuscript shelf can be told apart from a contradiction.

use crate::catalog::{Book, NDARK_MANUSCRIPTS};

/// Per-manuscript "may still be on its shelf" flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptTracker {
    obtainable: [bool; NDARK_MANUSCRIPTS],
}

impl ManuscriptTracker {
    pub fn new() -> Self {
        Self {
            obtainable: [true; NDARK_MANUSCRIPTS],
        }
    }

    /// Mark every manuscript as obtainable again.
    pub fn reset(&mut self) {
        self.obtainable = [true; NDARK_MANUSCRIPTS];
    }

    /// Whether `book` may still be taken from its shelf.
    ///
    /// Regular books are always obtainable.
    pub fn is_obtainable(&self, book: Book) -> bool {
        !book.is_dark_manuscript() || self.obtainable[book.as_usize()]
    }

    /// Record whether a manuscript was just seen on its shelf.
    ///
    /// Ignored for regular books.
    pub fn set_obtainable(&mut self, book: Book, obtainable: bool) {
        if book.is_dark_manuscript() {
            self.obtainable[book.as_usize()] = obtainable;
        }
    }

    /// Number of manuscripts not yet found missing.
    pub fn obtainable_count(&self) -> usize {
        self.obtainable.iter().filter(|&&o| o).count()
    }
}

impl Default for ManuscriptTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manuscripts_are_the_leading_ordinals() {
        // The tracker indexes its array by book ordinal.
        assert_eq!(Book::DarkManuscript13514.as_usize(), 0);
        assert_eq!(Book::DarkManuscript13523.as_usize(), NDARK_MANUSCRIPTS - 1);
    }

    #[test]
    fn test_set_and_reset() {
        let mut tracker = ManuscriptTracker::new();
        assert_eq!(tracker.obtainable_count(), NDARK_MANUSCRIPTS);

        tracker.set_obtainable(Book::DarkManuscript13518, false);
        assert!(!tracker.is_obtainable(Book::DarkManuscript13518));
        assert_eq!(tracker.obtainable_count(), NDARK_MANUSCRIPTS - 1);

        tracker.reset();
        assert!(tracker.is_obtainable(Book::DarkManuscript13518));
    }

    #[test]
    fn test_regular_books_ignored() {
        let mut tracker = ManuscriptTracker::new();
        tracker.set_obtainable(Book::RadasCensus, false);
        assert!(tracker.is_obtainable(Book::RadasCensus));
        assert_eq!(tracker.obtainable_count(), NDARK_MANUSCRIPTS);
    }
}
