// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Global solver status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far the deduction has progressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolvedState {
    /// Nothing useful observed yet.
    #[default]
    NoData,
    /// More than one placement is still consistent (or, after a manuscript
    /// reappeared in a shelf believed empty, possibly none).
    Incomplete,
    /// Exactly one placement is consistent; every bookcase is known.
    Complete,
}

impl fmt::Display for SolvedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolvedState::NoData => "no data",
            SolvedState::Incomplete => "incomplete",
            SolvedState::Complete => "complete",
        })
    }
}
