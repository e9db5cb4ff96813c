// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The five candidate book sequences.
//!
//! When the library reshuffles, the game picks one of these sequences and a
//! starting dense index, then places the sequence's books into every
//! `step`-th bookcase by index, wrapping around at the end.

use thiserror::Error;

use super::constants::{NBOOKS, NSEQUENCES};
use super::Book;
use Book::*;

/// Static-data invariant violations in the sequence table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("sequence {sequence} lists {book} more than once")]
    DuplicateBook { sequence: usize, book: Book },

    #[error("sequence {sequence} does not contain {book}")]
    MissingBook { sequence: usize, book: Book },
}

/// One fixed ordering of all 26 books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    id: usize,
    books: &'static [Book; NBOOKS],
}

impl Sequence {
    /// Index of this sequence in [`SEQUENCES`].
    pub fn id(&self) -> usize {
        self.id
    }

    /// Books in placement order.
    pub fn books(&self) -> &'static [Book; NBOOKS] {
        self.books
    }

    /// Book placed at ordinal `k`, if `k` is within the sequence.
    pub fn book_at(&self, k: usize) -> Option<Book> {
        self.books.get(k).copied()
    }

    /// Ordinal of `book` within this sequence.
    pub fn position(&self, book: Book) -> Option<usize> {
        self.books.iter().position(|&b| b == book)
    }

    /// All candidate sequences, in table order.
    pub fn all() -> [Sequence; NSEQUENCES] {
        std::array::from_fn(|id| Sequence {
            id,
            books: &SEQUENCES[id],
        })
    }

    /// Check that every sequence is a permutation of the full catalog.
    pub fn validate_all() -> Result<(), CatalogError> {
        use strum::IntoEnumIterator;

        for sequence in Self::all() {
            let mut seen = [false; NBOOKS];
            for &book in sequence.books {
                if std::mem::replace(&mut seen[book.as_usize()], true) {
                    return Err(CatalogError::DuplicateBook {
                        sequence: sequence.id,
                        book,
                    });
                }
            }
            if let Some(book) = Book::iter().find(|b| !seen[b.as_usize()]) {
                return Err(CatalogError::MissingBook {
                    sequence: sequence.id,
                    book,
                });
            }
        }
        Ok(())
    }
}

/// The sequence table, verbatim from the game.
pub static SEQUENCES: [[Book; NBOOKS]; NSEQUENCES] = [
    [
        DarkManuscript13516,
        KillingOfAKing,
        DarkManuscript13520,
        IdeologyOfDarkness,
        RadasJourney,
        TransvergenceTheory,
        TristessasTragedy,
        DarkManuscript13523,
        DarkManuscript13521,
        RadasCensus,
        TreacheryOfRoyalty,
        HosidiusLetter,
        DarkManuscript13519,
        RicktorsDiary7,
        DarkManuscript13514,
        EathramRadaExtract,
        DarkManuscript13522,
        VarlamoreEnvoy,
        WintertodtParable,
        TwillAccord,
        DarkManuscript13515,
        ByrnesCoronationSpeech,
        DarkManuscript13517,
        SoulJourney,
        DarkManuscript13518,
        TransportationIncantations,
    ],
    [
        DarkManuscript13516,
        KillingOfAKing,
        DarkManuscript13520,
        IdeologyOfDarkness,
        RadasJourney,
        TransvergenceTheory,
        TristessasTragedy,
        DarkManuscript13523,
        DarkManuscript13521,
        RadasCensus,
        TreacheryOfRoyalty,
        HosidiusLetter,
        VarlamoreEnvoy,
        DarkManuscript13519,
        RicktorsDiary7,
        DarkManuscript13514,
        EathramRadaExtract,
        DarkManuscript13522,
        SoulJourney,
        WintertodtParable,
        TwillAccord,
        DarkManuscript13515,
        ByrnesCoronationSpeech,
        DarkManuscript13517,
        DarkManuscript13518,
        TransportationIncantations,
    ],
    [
        RicktorsDiary7,
        VarlamoreEnvoy,
        DarkManuscript13514,
        EathramRadaExtract,
        IdeologyOfDarkness,
        DarkManuscript13516,
        DarkManuscript13521,
        RadasCensus,
        DarkManuscript13515,
        KillingOfAKing,
        DarkManuscript13520,
        TreacheryOfRoyalty,
        HosidiusLetter,
        DarkManuscript13519,
        ByrnesCoronationSpeech,
        DarkManuscript13517,
        SoulJourney,
        DarkManuscript13522,
        WintertodtParable,
        TwillAccord,
        RadasJourney,
        TransvergenceTheory,
        TristessasTragedy,
        DarkManuscript13523,
        DarkManuscript13518,
        TransportationIncantations,
    ],
    [
        RadasCensus,
        DarkManuscript13522,
        RicktorsDiary7,
        DarkManuscript13514,
        EathramRadaExtract,
        DarkManuscript13516,
        KillingOfAKing,
        DarkManuscript13520,
        HosidiusLetter,
        DarkManuscript13519,
        DarkManuscript13521,
        WintertodtParable,
        TwillAccord,
        DarkManuscript13515,
        ByrnesCoronationSpeech,
        DarkManuscript13517,
        IdeologyOfDarkness,
        RadasJourney,
        TransvergenceTheory,
        TristessasTragedy,
        DarkManuscript13523,
        TreacheryOfRoyalty,
        DarkManuscript13518,
        TransportationIncantations,
        SoulJourney,
        VarlamoreEnvoy,
    ],
    [
        RadasCensus,
        TransvergenceTheory,
        TreacheryOfRoyalty,
        RadasJourney,
        KillingOfAKing,
        DarkManuscript13520,
        VarlamoreEnvoy,
        DarkManuscript13522,
        ByrnesCoronationSpeech,
        DarkManuscript13517,
        HosidiusLetter,
        DarkManuscript13516,
        DarkManuscript13519,
        TristessasTragedy,
        DarkManuscript13523,
        DarkManuscript13521,
        RicktorsDiary7,
        DarkManuscript13514,
        IdeologyOfDarkness,
        WintertodtParable,
        TwillAccord,
        SoulJourney,
        DarkManuscript13515,
        EathramRadaExtract,
        DarkManuscript13518,
        TransportationIncantations,
    ],
];
