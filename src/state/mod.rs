// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, rebuilt from observations each session).
//!
//! - SlotContent / SlotState / Slots: what is known about each bookcase
//! - ManuscriptTracker: which dark manuscripts may still be on their shelf
//! - SolvedState: global deduction status
//! - Statistics: counters for observations, analyses and contradictions

pub mod manuscripts;
pub mod slot;
pub mod solved;
pub mod statistics;

pub use manuscripts::ManuscriptTracker;
pub use slot::{SlotContent, SlotState, Slots};
pub use solved::SolvedState;
pub use statistics::{Counters, Statistics};
