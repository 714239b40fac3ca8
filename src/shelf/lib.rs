//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic inventory library**. The CLI binary is just
//! one client of it; the library owns every rule about how product
//! records are validated, identified, and persisted.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, binary only)                 │
//! │  - Parses arguments, formats output, owns exit codes        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Converts adapter errors into structured results          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One read-validate-mutate-write cycle per operation       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The File Is the Collection
//!
//! The persisted JSON file is the single source of truth. Every
//! operation re-reads the whole collection before mutating it and
//! rewrites it in full afterwards, so no stale in-memory state survives
//! between calls. That makes the core trivially correct for a single
//! session at the cost of re-reading per call, a deliberate trade-off
//! at this scale.
//!
//! The flip side: there is no inter-process locking. One writer at a
//! time is assumed; concurrent mutation needs an external
//! mutual-exclusion layer.
//!
//! ## ID Assignment
//!
//! IDs are sequential (`max + 1`, starting at 1) and assigned by the
//! *caller* via [`api::InventoryApi::next_id`] before `create`. There is
//! no persisted counter, so deleting the record with the highest ID
//! frees that ID for the next create. That behavior is part of the
//! contract, not an accident.
//!
//! ## Testing Strategy
//!
//! - **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!   This is where the lion's share of testing lives.
//! - **Storage** (`tests/fs_store.rs`): `FileStore` against real temp
//!   directories, including corrupt-file and truncation behavior.
//! - **CLI** (`tests/cli_e2e.rs`): end-to-end through the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: One module per operation, plus shared result types
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Product` record
//! - [`validate`]: Pure field validation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
