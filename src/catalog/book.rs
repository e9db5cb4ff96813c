// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Book type for the items placed on the library shelves.
//!
//! There are 26 books. Ten of them are dark manuscripts: they are all placed
//! on shelves, but a player can only hold one at a time, so a manuscript that
//! has been taken is indistinguishable from an empty shelf.
//!
//! # Examples
//!
//! ```
//! use kourend_library::catalog::Book;
//!
//! let book = Book::from_name("rada's census").unwrap();
//! assert_eq!(book, Book::RadasCensus);
//! assert_eq!(book.item_id(), 13524);
//! assert!(!book.is_dark_manuscript());
//! assert!(Book::DarkManuscript13516.is_dark_manuscript());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A book that can be found in a library bookcase.
///
/// This is a fixed, immutable universe. Session state attached to books
/// (whether a manuscript is still obtainable) lives in
/// [`crate::state::ManuscriptTracker`], never on the enum itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCountMacro,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Book {
    DarkManuscript13514,
    DarkManuscript13515,
    DarkManuscript13516,
    DarkManuscript13517,
    DarkManuscript13518,
    DarkManuscript13519,
    DarkManuscript13520,
    DarkManuscript13521,
    DarkManuscript13522,
    DarkManuscript13523,
    RadasCensus,
    RicktorsDiary7,
    EathramRadaExtract,
    KillingOfAKing,
    HosidiusLetter,
    WintertodtParable,
    TwillAccord,
    ByrnesCoronationSpeech,
    IdeologyOfDarkness,
    RadasJourney,
    TransvergenceTheory,
    TristessasTragedy,
    TreacheryOfRoyalty,
    TransportationIncantations,
    SoulJourney,
    VarlamoreEnvoy,
}

const DARK_MANUSCRIPT_NAME: &str = "Dark manuscript";

impl Book {
    /// Dense ordinal of this book (0..NBOOKS), for array indexing.
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Game item id.
    pub fn item_id(self) -> u32 {
        match self {
            Book::DarkManuscript13514 => 13514,
            Book::DarkManuscript13515 => 13515,
            Book::DarkManuscript13516 => 13516,
            Book::DarkManuscript13517 => 13517,
            Book::DarkManuscript13518 => 13518,
            Book::DarkManuscript13519 => 13519,
            Book::DarkManuscript13520 => 13520,
            Book::DarkManuscript13521 => 13521,
            Book::DarkManuscript13522 => 13522,
            Book::DarkManuscript13523 => 13523,
            Book::RadasCensus => 13524,
            Book::RicktorsDiary7 => 13525,
            Book::EathramRadaExtract => 13526,
            Book::KillingOfAKing => 13527,
            Book::HosidiusLetter => 13528,
            Book::WintertodtParable => 13529,
            Book::TwillAccord => 13530,
            Book::ByrnesCoronationSpeech => 13531,
            Book::IdeologyOfDarkness => 13532,
            Book::RadasJourney => 13533,
            Book::TransvergenceTheory => 13534,
            Book::TristessasTragedy => 13535,
            Book::TreacheryOfRoyalty => 13536,
            Book::TransportationIncantations => 13537,
            Book::SoulJourney => 19637,
            Book::VarlamoreEnvoy => 21756,
        }
    }

    /// Display name, as shown in game.
    ///
    /// All dark manuscripts share one name.
    pub fn name(self) -> &'static str {
        match self {
            Book::RadasCensus => "Rada's Census",
            Book::RicktorsDiary7 => "Ricktor's Diary",
            Book::EathramRadaExtract => "Eathram & Rada extract",
            Book::KillingOfAKing => "Killing of a King",
            Book::HosidiusLetter => "Hosidius Letter",
            Book::WintertodtParable => "Wintertodt Parable",
            Book::TwillAccord => "Twill Accord",
            Book::ByrnesCoronationSpeech => "Byrne's Coronation Speech",
            Book::IdeologyOfDarkness => "The Ideology of Darkness",
            Book::RadasJourney => "Rada's Journey",
            Book::TransvergenceTheory => "Transvergence Theory",
            Book::TristessasTragedy => "Tristessa's Tragedy",
            Book::TreacheryOfRoyalty => "The Treachery of Royalty",
            Book::TransportationIncantations => "Transportation Incantations",
            Book::SoulJourney => "Soul Journey",
            Book::VarlamoreEnvoy => "Varlamore Envoy",
            _ => DARK_MANUSCRIPT_NAME,
        }
    }

    /// Whether this is one of the ten mutually fungible dark manuscripts.
    pub fn is_dark_manuscript(self) -> bool {
        self <= Book::DarkManuscript13523
    }

    /// Look up a book by its game item id.
    pub fn from_item_id(item_id: u32) -> Option<Self> {
        Book::iter().find(|b| b.item_id() == item_id)
    }

    /// Look up a regular book by display name, ignoring ASCII case.
    ///
    /// Dark manuscripts share a single name and are never returned.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Book::iter()
            .filter(|b| !b.is_dark_manuscript())
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Look up any book from user input: a regular book's name, an item id,
    /// or a manuscript written as "Dark manuscript 13516" or
    /// "Dark manuscript (13516)".
    pub fn parse(query: &str) -> Option<Self> {
        let query = query.trim();
        if let Ok(item_id) = query.parse::<u32>() {
            return Book::from_item_id(item_id);
        }
        if let Some(book) = Book::from_name(query) {
            return Some(book);
        }
        let prefix = query.get(..DARK_MANUSCRIPT_NAME.len())?;
        if !prefix.eq_ignore_ascii_case(DARK_MANUSCRIPT_NAME) {
            return None;
        }
        let item_id = query[DARK_MANUSCRIPT_NAME.len()..]
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim()
            .parse::<u32>()
            .ok()?;
        Book::from_item_id(item_id).filter(|b| b.is_dark_manuscript())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dark_manuscript() {
            write!(f, "{} ({})", DARK_MANUSCRIPT_NAME, self.item_id())
        } else {
            f.write_str(self.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_ids_are_unique() {
        let ids: HashSet<u32> = Book::iter().map(Book::item_id).collect();
        assert_eq!(ids.len(), 26);
    }

    #[test]
    fn test_from_item_id() {
        assert_eq!(Book::from_item_id(13520), Some(Book::DarkManuscript13520));
        assert_eq!(Book::from_item_id(21756), Some(Book::VarlamoreEnvoy));
        assert_eq!(Book::from_item_id(1), None);
    }

    #[test]
    fn test_from_name_skips_manuscripts() {
        assert_eq!(Book::from_name("Dark manuscript"), None);
        assert_eq!(
            Book::from_name("  the treachery of royalty "),
            Some(Book::TreacheryOfRoyalty)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Book::parse("Soul journey"), Some(Book::SoulJourney));
        assert_eq!(Book::parse(" 13527 "), Some(Book::KillingOfAKing));
        assert_eq!(Book::parse("13516"), Some(Book::DarkManuscript13516));
        assert_eq!(
            Book::parse("dark manuscript 13516"),
            Some(Book::DarkManuscript13516)
        );
        assert_eq!(
            Book::parse("Dark manuscript (13523)"),
            Some(Book::DarkManuscript13523)
        );
        assert_eq!(Book::parse("Dark manuscript 13524"), None);
        assert_eq!(Book::parse("Dark manuscript"), None);
        assert_eq!(Book::parse("Necronomicon"), None);
        for book in Book::iter() {
            assert_eq!(Book::parse(&book.to_string()), Some(book));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Book::SoulJourney.to_string(), "Soul Journey");
        assert_eq!(
            Book::DarkManuscript13514.to_string(),
            "Dark manuscript (13514)"
        );
    }

    #[test]
    fn test_as_usize_is_dense() {
        for (i, book) in Book::iter().enumerate() {
            assert_eq!(book.as_usize(), i);
        }
    }
}
