// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static bookcase records.

use super::Location;

/// Dense identifier of a physical bookcase (0..number of bookcases).
///
/// Distinct from a dense *index*: a duplicated bookcase has one id but two
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookcaseId(pub(crate) usize);

impl BookcaseId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// A physical bookcase and the dense indices it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookcase {
    pub id: BookcaseId,
    pub location: Location,
    /// Index into [`super::Layout::rooms`].
    pub room: usize,
    /// One index, or two for the duplicated bookcases. Ascending.
    pub indices: Vec<usize>,
}

impl Bookcase {
    /// Whether this bookcase owns more than one dense index.
    pub fn is_duplicated(&self) -> bool {
        self.indices.len() > 1
    }

    /// Lowest dense index owned by this bookcase.
    pub fn first_index(&self) -> usize {
        self.indices[0]
    }
}
