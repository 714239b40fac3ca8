//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for all inventory
//! operations, regardless of the client driving them. It dispatches to
//! the command layer and converts adapter errors into structured,
//! user-facing results.
//!
//! ## Failure Conversion
//!
//! Command functions return `Result<_, ShelfError>`; nothing past this
//! facade ever sees a raw error. An unparsable data file surfaces as a
//! "format problem" message, every other adapter failure as a generic
//! one. Validation failures are not errors at all; they travel as data
//! inside [`OpResult`].
//!
//! ## Generic Over DataStore
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands::{self, OpResult, QueryResult, SingleResult};
use crate::error::ShelfError;
use crate::model::Product;
use crate::store::DataStore;

/// The main facade for inventory operations.
///
/// Every mutating method is one full load→(validate)→mutate→save cycle
/// against the store; nothing is cached between calls.
pub struct InventoryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Next free product ID, or [`commands::helpers::SENTINEL_ID`] when
    /// the collection cannot be read.
    pub fn next_id(&self) -> i64 {
        commands::helpers::next_id(&self.store)
    }

    /// Validates and appends a candidate. The caller is responsible for
    /// having set `id` (via [`Self::next_id`]) and `created_at`.
    pub fn create(&mut self, candidate: Product) -> OpResult {
        commands::create::run(&mut self.store, candidate)
            .unwrap_or_else(|e| OpResult::fail(failure_message(&e)))
    }

    /// Replaces the mutable fields of the record with the given ID.
    /// `id` and `created_at` of the stored record always win over
    /// whatever the candidate carries.
    pub fn update(&mut self, id: i64, candidate: Product) -> OpResult {
        commands::update::run(&mut self.store, id, candidate)
            .unwrap_or_else(|e| OpResult::fail(failure_message(&e)))
    }

    /// Permanently removes the record with the given ID.
    pub fn delete(&mut self, id: i64) -> OpResult {
        commands::delete::run(&mut self.store, id)
            .unwrap_or_else(|e| OpResult::fail(failure_message(&e)))
    }

    /// All products, optionally narrowed by a predicate, in file order.
    pub fn get_products(&self, filter: Option<&dyn Fn(&Product) -> bool>) -> QueryResult {
        match commands::get::run(&self.store, filter) {
            Ok(products) => QueryResult {
                products: Some(products),
                message: None,
            },
            Err(e) => QueryResult {
                products: None,
                message: Some(failure_message(&e)),
            },
        }
    }

    /// First product matching the predicate, in file order.
    pub fn get_product(&self, filter: &dyn Fn(&Product) -> bool) -> SingleResult {
        match commands::get::first(&self.store, filter) {
            Ok(Some(product)) => SingleResult {
                product: Some(product),
                message: None,
            },
            Ok(None) => SingleResult {
                product: None,
                message: Some("Product not found.".to_string()),
            },
            Err(e) => SingleResult {
                product: None,
                message: Some(failure_message(&e)),
            },
        }
    }
}

fn failure_message(err: &ShelfError) -> String {
    match err {
        ShelfError::ProductNotFound(id) => format!("Product with ID {} not found.", id),
        ShelfError::CorruptData(_) => {
            "Something went wrong: the inventory file is not in a valid format.".to_string()
        }
        ShelfError::Io(_) => "An unexpected error occurred.".to_string(),
    }
}
