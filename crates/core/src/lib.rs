//! Snapfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for tracking portfolio value
//! through periodic per-category snapshots. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod snapshots;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
