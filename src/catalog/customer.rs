// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Library customers.
//!
//! Three NPCs ask the player to fetch a book. Which one is asking, and for
//! what, is supplied by an external collaborator; the engine only stores the
//! pair so that queries can answer "where is the book they want".

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// An NPC that requests books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Customer {
    Villia,
    ProfessorGracklebone,
    Sam,
}

impl Customer {
    /// Game NPC id.
    pub fn npc_id(self) -> u32 {
        match self {
            Customer::Villia => 7047,
            Customer::ProfessorGracklebone => 7048,
            Customer::Sam => 7049,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Customer::Villia => "Villia",
            Customer::ProfessorGracklebone => "Prof. Gracklebone",
            Customer::Sam => "Sam",
        }
    }

    /// Look up a customer by NPC id.
    pub fn from_npc_id(npc_id: u32) -> Option<Self> {
        Customer::iter().find(|c| c.npc_id() == npc_id)
    }
}
