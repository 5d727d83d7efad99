use crate::errors::Result;
use crate::snapshots::snapshots_model::{DeleteOutcome, NewSnapshot, Snapshot, ValidatedSnapshot};
use async_trait::async_trait;

/// Trait for snapshot repository operations
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// All snapshots ordered by date ascending, ties by id ascending.
    fn list(&self) -> Result<Vec<Snapshot>>;
    /// The newest `limit` snapshots, newest first.
    fn list_recent(&self, limit: i64) -> Result<Vec<Snapshot>>;
    async fn create(&self, input: ValidatedSnapshot) -> Result<Snapshot>;
    /// Returns the number of deleted rows.
    async fn delete(&self, snapshot_id: i32) -> Result<usize>;
}

/// Trait for snapshot service operations
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    fn list_snapshots(&self) -> Result<Vec<Snapshot>>;
    fn recent_snapshots(&self, limit: usize) -> Result<Vec<Snapshot>>;
    async fn create_snapshot(&self, new_snapshot: NewSnapshot) -> Result<Snapshot>;
    async fn delete_snapshot(&self, snapshot_id: i32) -> Result<DeleteOutcome>;
    fn asset_categories(&self) -> Vec<String>;
    /// Category preselected when logging a new snapshot.
    fn default_asset_category(&self) -> String;
}
