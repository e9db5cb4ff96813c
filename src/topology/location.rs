// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spatial key identifying a bookcase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A world tile: x, y and plane (floor).
///
/// This is the identifier external collaborators use when reporting what a
/// player saw. Locations outside the library resolve to no bookcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub plane: u8,
}

impl Location {
    pub const fn new(x: i32, y: i32, plane: u8) -> Self {
        Self { x, y, plane }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}
