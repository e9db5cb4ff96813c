// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduce the book arrangement of the Kourend library from partial
//! observations.
//!
//! The library's bookcases are laid out along a fixed dense index. Each
//! session the game places the 26 books according to one of five fixed
//! sequences, rotated by an unknown origin, one book every `step` indices.
//! Each observation of a bookcase (a book, or an empty shelf) rules out
//! (sequence, origin) placements; once one placement remains, every book's
//! bookcase is known.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Static data validated once at construction:
//! - Floors, rooms and the 353-entry dense index over the bookcases
//! - The five book sequences
//! - The rotation step
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Session state rebuilt from observations:
//! - Per-bookcase knowledge (unknown, empty, a book) and possibility sets
//! - Dark manuscript availability
//! - The surviving placements and the solved state
//!
//! # Contradictions
//!
//! An observation that disagrees with a deduction means the arrangement
//! changed since the earlier observations. The engine then forgets
//! everything and restarts from the new observation alone.

pub mod catalog;
pub mod context;
pub mod engine;
pub mod propagation;
pub mod replay;
pub mod state;
pub mod topology;

// Re-export commonly used types
pub use catalog::{Book, Customer};
pub use context::MemoizedData;
pub use engine::{Library, SharedLibrary};
pub use propagation::{Contradiction, ContradictionKind, Placement};
pub use state::{SlotContent, SolvedState};
pub use topology::Location;
