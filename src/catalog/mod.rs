// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static catalog of the library.
//!
//! This module contains the fixed universe the engine reasons about:
//! - Book: the 26 items, 10 of which are dark manuscripts
//! - Sequence: the 5 orderings the game chooses between
//! - Customer: the NPCs that request books

pub mod book;
pub mod constants;
pub mod customer;
pub mod sequence;

pub use book::Book;
pub use constants::*;
pub use customer::Customer;
pub use sequence::{CatalogError, Sequence, SEQUENCES};
