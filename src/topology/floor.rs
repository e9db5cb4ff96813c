// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Floors and rooms of the library.

use super::Location;

/// One floor of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub name: &'static str,
    pub plane: u8,
}

/// A named rectangular region of one floor. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: &'static str,
    pub plane: u8,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Room {
    /// Whether `location` lies inside this room.
    pub fn contains(&self, location: Location) -> bool {
        location.plane == self.plane
            && (self.min_x..=self.max_x).contains(&location.x)
            && (self.min_y..=self.max_y).contains(&location.y)
    }

    /// Whether the interiors of two rooms on the same floor intersect.
    ///
    /// Rooms that merely share a boundary line do not overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.plane == other.plane
            && self.max_x > other.min_x
            && self.min_x < other.max_x
            && self.max_y > other.min_y
            && self.min_y < other.max_y
    }
}
