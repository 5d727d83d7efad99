//! Snapshots module - value snapshot models, service, and traits.

mod snapshots_model;
mod snapshots_service;
mod snapshots_traits;

#[cfg(test)]
mod snapshots_model_tests;
#[cfg(test)]
mod snapshots_service_tests;

pub use snapshots_model::{DeleteOutcome, NewSnapshot, Snapshot, ValidatedSnapshot};
pub use snapshots_service::SnapshotService;
pub use snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
