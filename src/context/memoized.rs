// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use thiserror::Error;

use crate::catalog::{CatalogError, Sequence, NBOOKS, NSEQUENCES};
use crate::topology::{Layout, LayoutError};

/// Invalid static data. This is a programming error, never a runtime one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaticDataError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("{indices} bookcase indices cannot hold a full sequence")]
    TooFewIndices { indices: usize },
}

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Built once and never modified. It can be shared between several
/// [`crate::Library`] instances via [`crate::Library::with_memo`].
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Physical bookcases and their dense indices.
    pub layout: Layout,

    /// The candidate sequences, in table order.
    pub sequences: [Sequence; NSEQUENCES],

    /// Distance in dense indices between consecutive books of a sequence.
    pub step: usize,
}

impl MemoizedData {
    /// Build and validate the standard library data.
    ///
    /// # Panics
    ///
    /// Panics if the static tables violate their invariants.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(memo) => memo,
            Err(e) => panic!("invalid static library data: {e}"),
        }
    }

    /// Build and validate the standard library data.
    pub fn try_new() -> Result<Self, StaticDataError> {
        Self::with_layout(Layout::standard()?)
    }

    /// Build MEMO data around an arbitrary layout.
    pub fn with_layout(layout: Layout) -> Result<Self, StaticDataError> {
        Sequence::validate_all()?;

        let indices = layout.index_count();
        let step = indices / NBOOKS;
        if step == 0 {
            return Err(StaticDataError::TooFewIndices { indices });
        }

        tracing::info!(
            bookcases = layout.bookcases().len(),
            indices,
            step,
            "library data initialized"
        );

        Ok(Self {
            layout,
            sequences: Sequence::all(),
            step,
        })
    }

    /// Number of dense indices, the modulus of every rotation.
    pub fn index_count(&self) -> usize {
        self.layout.index_count()
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new()
    }
}
