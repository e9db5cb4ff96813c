// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the dynamic state and incremented by the engine
//! as observations are processed. Contradictions are counted per kind, after
//! the general counters.

use crate::propagation::ContradictionKind;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Observations passed to `mark`.
    Observations,
    /// Observations at locations outside the library.
    IgnoredObservations,
    /// Full consistency passes over every candidate placement.
    Analyses,
    /// Passes that ended with a single consistent placement.
    Solutions,
    /// Explicit calls to `reset`.
    Resets,
}

const COUNT: usize = Counters::COUNT + ContradictionKind::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn increment_contradiction(&mut self, kind: ContradictionKind) {
        self.stats[Counters::COUNT + kind as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of contradictions of the given kind.
    pub fn contradictions(&self, kind: ContradictionKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Number of contradictions of any kind.
    pub fn total_contradictions(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}
