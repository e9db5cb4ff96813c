// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A [`Library`] shared between threads.
//!
//! Observations take the write lock for the whole of [`Library::mark`], so
//! readers see either the state before an observation or the state after
//! it, never an intermediate one.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Library;
use crate::catalog::{Book, Customer};
use crate::state::SolvedState;
use crate::topology::Location;

/// Cloneable handle to one engine.
#[derive(Debug, Clone, Default)]
pub struct SharedLibrary {
    inner: Arc<RwLock<Library>>,
}

impl SharedLibrary {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(RwLock::new(library)),
        }
    }

    pub fn mark(&self, location: Location, observed: Option<Book>) {
        self.inner.write().mark(location, observed);
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn set_customer(&self, customer: Customer, book: Book) {
        self.inner.write().set_customer(customer, book);
    }

    pub fn clear_customer(&self) {
        self.inner.write().clear_customer();
    }

    /// Run `f` against a consistent snapshot of the engine.
    pub fn read<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn state(&self) -> SolvedState {
        self.inner.read().state()
    }

    pub fn locate(&self, book: Book) -> Vec<Location> {
        self.inner.read().locate(book)
    }
}
