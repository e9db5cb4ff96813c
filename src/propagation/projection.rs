// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Projection of surviving placements onto the bookcases.

use crate::context::MemoizedData;
use crate::state::{SlotContent, Slots};

use super::alignment::Placement;

/// Write what the surviving placements predict into the slot table.
///
/// With a single survivor (`complete`), every bookcase is assigned its
/// predicted content. A duplicated bookcase is walked twice, so it is only
/// overwritten by a real book, or when nothing is known about it yet.
///
/// Otherwise each unknown bookcase accumulates one possibility per placement
/// that puts a book there.
pub fn project(memo: &MemoizedData, slots: &mut Slots, placements: &[Placement], complete: bool) {
    for &placement in placements {
        for (index, predicted) in placement.walk(memo) {
            let bookcase = memo.layout.at_index(index);
            let slot = slots.get_mut(bookcase.id);
            if complete {
                if !bookcase.is_duplicated() || predicted.is_some() || !slot.content.is_known() {
                    slot.content = SlotContent::observed(predicted);
                }
            } else if !slot.content.is_known() {
                if let Some(book) = predicted {
                    slot.possible.push(book);
                }
            }
        }
    }
}

/// Confirm unknown bookcases that every survivor agrees on.
///
/// No possibility at all means no survivor puts a book there: the bookcase
/// is empty. `available` identical possibilities mean every survivor puts
/// the same book there.
pub fn collapse(slots: &mut Slots, available: usize) {
    for slot in slots.iter_mut() {
        if slot.content.is_known() {
            continue;
        }
        if slot.possible.is_empty() {
            slot.content = SlotContent::Empty;
        } else if let Some(book) = slot.unanimous(available) {
            slot.content = SlotContent::Book(book);
        }
    }
}
