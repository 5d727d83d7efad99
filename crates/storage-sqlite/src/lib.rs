//! SQLite storage implementation for Snapfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `snapfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that serializes inserts and deletes
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!   server ──► core (domain, traits)
//!     │              ▲
//!     └──► storage-sqlite (this crate)
//!                    │
//!                    ▼
//!                SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, write_actor::spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use snapshots::SnapshotRepository;

// Re-export from snapfolio-core for convenience
pub use snapfolio_core::errors::{DatabaseError, Error, Result};
