// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use kourend_library::replay::Observation;
use kourend_library::{Book, Library, Location, Placement};

/// What every bookcase holds under `placement`, in bookcase order.
pub fn truth(library: &Library, placement: Placement) -> Vec<Observation> {
    let memo = library.memo();
    let bookcases = memo.layout.bookcases();
    let mut books: Vec<Option<Book>> = vec![None; bookcases.len()];
    for (index, book) in placement.walk(memo) {
        if book.is_some() {
            books[memo.layout.id_at(index).as_usize()] = book;
        }
    }
    bookcases
        .iter()
        .zip(books)
        .map(|(bookcase, book)| Observation::new(bookcase.location, book))
        .collect()
}

/// Only the observations of bookcases holding a book, in index order.
pub fn books_only(observations: &[Observation]) -> Vec<Observation> {
    observations
        .iter()
        .copied()
        .filter(|o| o.book.is_some())
        .collect()
}

/// Location owning dense index `index`.
pub fn at_index(library: &Library, index: usize) -> Location {
    library.memo().layout.at_index(index).location
}

/// Mark observations until the library is solved; returns how many were used.
pub fn mark_until_complete(library: &mut Library, observations: &[Observation]) -> usize {
    for (n, observation) in observations.iter().enumerate() {
        library.mark(observation.location, observation.book);
        if library.state() == kourend_library::SolvedState::Complete {
            return n + 1;
        }
    }
    observations.len()
}
