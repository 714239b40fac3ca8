//! # Storage Layer
//!
//! This module defines the persistence abstraction for shelf. The
//! [`DataStore`] trait lets the rest of the crate work against different
//! storage backends.
//!
//! ## Design Rationale
//!
//! The collection has no identity beyond what the backing store last
//! wrote: `load` returns the entire collection and `save` replaces it
//! wholesale. There are no partial reads or writes, which is what keeps
//! the read-validate-mutate-write cycles in `commands/` simple.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection lives in one JSON array file
//!   - Saves go through a scratch file and an atomic rename
//!   - A missing or blank file is an empty collection, not an error
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate an unreadable backing file

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory persistence.
///
/// Implementations must treat the stored collection as the single source
/// of truth: every `load` reflects the last successful `save` in full.
pub trait DataStore {
    /// Load the full collection. A store with nothing written yet yields
    /// an empty collection.
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the full collection. Prior content is discarded entirely.
    fn save(&mut self, products: &[Product]) -> Result<()>;
}
