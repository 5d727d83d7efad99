use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::constants::{ASSET_CATEGORIES, DEFAULT_ASSET_CATEGORY};
use crate::errors::Result;
use crate::snapshots::snapshots_model::{DeleteOutcome, NewSnapshot, Snapshot};
use crate::snapshots::snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};

/// Service for logging, listing and deleting value snapshots.
pub struct SnapshotService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        SnapshotService { repository }
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    fn list_snapshots(&self) -> Result<Vec<Snapshot>> {
        self.repository.list()
    }

    fn recent_snapshots(&self, limit: usize) -> Result<Vec<Snapshot>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.repository.list_recent(limit)
    }

    async fn create_snapshot(&self, new_snapshot: NewSnapshot) -> Result<Snapshot> {
        let input = new_snapshot.validate()?;
        debug!(
            "Logging snapshot for '{}' on {}: {}",
            input.asset_category, input.date, input.amount
        );
        self.repository.create(input).await
    }

    async fn delete_snapshot(&self, snapshot_id: i32) -> Result<DeleteOutcome> {
        let deleted = self.repository.delete(snapshot_id).await?;
        if deleted == 0 {
            debug!("Snapshot {} not found, nothing deleted", snapshot_id);
            return Ok(DeleteOutcome::NotFound);
        }
        info!("Deleted snapshot {}", snapshot_id);
        Ok(DeleteOutcome::Deleted)
    }

    fn asset_categories(&self) -> Vec<String> {
        ASSET_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    fn default_asset_category(&self) -> String {
        DEFAULT_ASSET_CATEGORY.to_string()
    }
}
