//! # Toolspend Database Crate
//!
//! This crate is where inventory snapshots come from. The analytics engine
//! never talks to storage itself; it is handed records fetched here.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate encapsulates all storage-specific logic behind the
//!   `InventoryStore` trait, so the serving layer can run against PostgreSQL or a
//!   JSON snapshot alike.
//! - **Asynchronous & Pooled:** Database access is asynchronous and goes through a
//!   connection pool (`PgPool`).
//!
//! ## Public API
//!
//! - `connect` / `run_migrations`: Pool creation and schema setup.
//! - `InventoryStore`: The snapshot-fetching contract.
//! - `ToolRepository`: The PostgreSQL implementation.
//! - `InMemoryStore`: An in-memory implementation, loadable from a JSON file.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::ToolRepository;
pub use store::{InMemoryStore, InventoryStore};
