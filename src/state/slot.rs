// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-bookcase mutable state.

use crate::catalog::Book;
use crate::topology::BookcaseId;

/// What is known about the contents of one bookcase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlotContent {
    /// Nothing observed or deduced yet.
    #[default]
    Unknown,
    /// Confirmed to hold no book.
    Empty,
    /// Confirmed to hold this book.
    Book(Book),
}

impl SlotContent {
    /// Content corresponding to an observation, where `None` means empty.
    pub fn observed(book: Option<Book>) -> Self {
        match book {
            Some(book) => SlotContent::Book(book),
            None => SlotContent::Empty,
        }
    }

    pub fn is_known(self) -> bool {
        self != SlotContent::Unknown
    }

    pub fn book(self) -> Option<Book> {
        match self {
            SlotContent::Book(book) => Some(book),
            _ => None,
        }
    }
}

/// Mutable record for one bookcase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub content: SlotContent,

    /// Books still possible here, one entry per surviving placement that
    /// puts a book on this bookcase. Only meaningful while `content` is
    /// [`SlotContent::Unknown`]; rebuilt on every analysis pass.
    pub possible: Vec<Book>,
}

impl SlotState {
    pub fn reset(&mut self) {
        self.content = SlotContent::Unknown;
        self.possible.clear();
    }

    /// The single book every surviving placement agrees on, if there are
    /// exactly `available` entries and they are all equal.
    pub fn unanimous(&self, available: usize) -> Option<Book> {
        let (&first, rest) = self.possible.split_first()?;
        (self.possible.len() == available && rest.iter().all(|&b| b == first)).then_some(first)
    }
}

/// State of every bookcase, indexed by [`BookcaseId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    slots: Vec<SlotState>,
}

impl Slots {
    pub fn new(bookcase_count: usize) -> Self {
        Self {
            slots: vec![SlotState::default(); bookcase_count],
        }
    }

    /// Forget every observation and possibility.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(SlotState::reset);
    }

    /// Drop possibility sets, keeping confirmed contents.
    pub fn clear_possible(&mut self) {
        for slot in &mut self.slots {
            slot.possible.clear();
        }
    }

    #[inline]
    pub fn get(&self, id: BookcaseId) -> &SlotState {
        &self.slots[id.as_usize()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: BookcaseId) -> &mut SlotState {
        &mut self.slots[id.as_usize()]
    }

    #[inline]
    pub fn content(&self, id: BookcaseId) -> SlotContent {
        self.slots[id.as_usize()].content
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotState> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SlotState> {
        self.slots.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
