// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Physical topology of the library.
//!
//! - Location: spatial key (x, y, plane)
//! - Floor, Room: named regions, used for display
//! - Bookcase: a physical slot owning one or two dense indices
//! - Layout: all bookcases, indexed by location and by dense index

pub mod bookcase;
pub mod data;
pub mod floor;
pub mod layout;
pub mod location;

pub use bookcase::{Bookcase, BookcaseId};
pub use floor::{Floor, Room};
pub use layout::{Layout, LayoutError};
pub use location::Location;
