// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The physical layout of the library.
//!
//! A [`Layout`] owns every bookcase and offers O(1) lookup both by spatial
//! key (what collaborators report) and by dense index (what the deduction
//! engine walks).

use std::collections::HashMap;
use thiserror::Error;

use super::data::{BOOKCASES, FLOORS, ROOMS};
use super::{Bookcase, BookcaseId, Floor, Location, Room};

/// Static-data invariant violations in the coordinate tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("room {room} on plane {plane} has no floor")]
    RoomWithoutFloor { room: &'static str, plane: u8 },

    #[error("rooms {first} and {second} overlap on plane {plane}")]
    OverlappingRooms {
        first: &'static str,
        second: &'static str,
        plane: u8,
    },

    #[error("bookcase at {location} is not inside any room")]
    OutsideRooms { location: Location },

    #[error("bookcase at {location} owns {count} indices (max 2)")]
    TooManyIndices { location: Location, count: usize },

    #[error("layout has no bookcases")]
    Empty,
}

/// Floors, rooms and bookcases of the library.
#[derive(Debug, Clone)]
pub struct Layout {
    floors: Vec<Floor>,
    rooms: Vec<Room>,
    bookcases: Vec<Bookcase>,
    by_location: HashMap<Location, BookcaseId>,
    by_index: Vec<BookcaseId>,
}

impl Layout {
    /// Build the layout of the Arceuus library from the coordinate tables.
    pub fn standard() -> Result<Self, LayoutError> {
        let floors = FLOORS
            .iter()
            .map(|&(name, plane)| Floor { name, plane })
            .collect();
        let rooms = ROOMS
            .iter()
            .map(|&(name, min_x, max_x, min_y, max_y, plane)| Room {
                name,
                plane,
                min_x,
                max_x,
                min_y,
                max_y,
            })
            .collect();
        let locations = BOOKCASES
            .iter()
            .map(|&(x, y, plane)| Location::new(x, y, plane));
        Self::build(floors, rooms, locations)
    }

    /// Build a layout from locations listed in dense-index order.
    ///
    /// A location appearing more than once owns each index it appears at.
    pub fn build(
        floors: Vec<Floor>,
        rooms: Vec<Room>,
        locations: impl IntoIterator<Item = Location>,
    ) -> Result<Self, LayoutError> {
        for room in &rooms {
            if !floors.iter().any(|f| f.plane == room.plane) {
                return Err(LayoutError::RoomWithoutFloor {
                    room: room.name,
                    plane: room.plane,
                });
            }
        }
        for (i, first) in rooms.iter().enumerate() {
            if let Some(second) = rooms[i + 1..].iter().find(|r| first.overlaps(r)) {
                return Err(LayoutError::OverlappingRooms {
                    first: first.name,
                    second: second.name,
                    plane: first.plane,
                });
            }
        }

        let mut bookcases: Vec<Bookcase> = Vec::new();
        let mut by_location = HashMap::new();
        let mut by_index = Vec::new();

        for (index, location) in locations.into_iter().enumerate() {
            let id = match by_location.get(&location) {
                Some(&id) => id,
                None => {
                    let room = rooms
                        .iter()
                        .rposition(|r| r.contains(location))
                        .ok_or(LayoutError::OutsideRooms { location })?;
                    let id = BookcaseId(bookcases.len());
                    bookcases.push(Bookcase {
                        id,
                        location,
                        room,
                        indices: Vec::with_capacity(1),
                    });
                    by_location.insert(location, id);
                    id
                }
            };
            let bookcase = &mut bookcases[id.0];
            bookcase.indices.push(index);
            if bookcase.indices.len() > 2 {
                return Err(LayoutError::TooManyIndices {
                    location,
                    count: bookcase.indices.len(),
                });
            }
            by_index.push(id);
        }

        if bookcases.is_empty() {
            return Err(LayoutError::Empty);
        }

        Ok(Self {
            floors,
            rooms,
            bookcases,
            by_location,
            by_index,
        })
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All bookcases, ordered by lowest dense index.
    pub fn bookcases(&self) -> &[Bookcase] {
        &self.bookcases
    }

    /// Number of dense indices (not bookcases).
    pub fn index_count(&self) -> usize {
        self.by_index.len()
    }

    /// Bookcase at a spatial key, if it is part of the library.
    pub fn lookup(&self, location: Location) -> Option<&Bookcase> {
        self.by_location
            .get(&location)
            .map(|id| &self.bookcases[id.0])
    }

    pub fn get(&self, id: BookcaseId) -> &Bookcase {
        &self.bookcases[id.0]
    }

    /// Id of the bookcase owning dense index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.index_count()`.
    #[inline]
    pub fn id_at(&self, index: usize) -> BookcaseId {
        self.by_index[index]
    }

    /// Bookcase owning dense index `index`.
    #[inline]
    pub fn at_index(&self, index: usize) -> &Bookcase {
        &self.bookcases[self.by_index[index].0]
    }

    /// Human readable position, e.g. "Northwest room, Top floor".
    pub fn describe(&self, bookcase: &Bookcase) -> String {
        let room = &self.rooms[bookcase.room];
        let floor = self
            .floors
            .iter()
            .find(|f| f.plane == room.plane)
            .map_or("Unknown", |f| f.name);
        format!("{} room, {} floor", room.name, floor)
    }
}
