// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduction context combining MEMO and DYNAMIC state.
//!
//! - Tier 1 (MEMO): the layout and the candidate sequences, immutable
//! - Tier 2 (DYNAMIC): per-bookcase knowledge and manuscript availability
//!
//! Propagation functions take the two tiers separately so that the
//! immutable data can be borrowed while the state is mutated.

pub mod dynamic;
pub mod memoized;

pub use dynamic::DynamicState;
pub use memoized::{MemoizedData, StaticDataError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SolvedState;

    #[test]
    fn test_memo_step() {
        let memo = MemoizedData::new();
        assert_eq!(memo.index_count(), 353);
        assert_eq!(memo.step, 13);
    }

    #[test]
    fn test_dynamic_state_starts_empty() {
        let memo = MemoizedData::new();
        let state = DynamicState::new(&memo);
        assert_eq!(state.slots.len(), memo.layout.bookcases().len());
        assert_eq!(state.solved, SolvedState::NoData);
        assert!(state.placements.is_empty());
        assert!(state.slots.iter().all(|s| !s.content.is_known()));
    }
}
