//! SQLite storage implementation for snapshots.

mod model;
mod repository;

pub use model::{NewSnapshotDB, SnapshotDB};
pub use repository::SnapshotRepository;
