use snapfolio_core::snapshots::{Snapshot, SnapshotRepositoryTrait, ValidatedSnapshot};
use snapfolio_core::Result;

use super::model::{NewSnapshotDB, SnapshotDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::snapshots;
use crate::schema::snapshots::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn list(&self) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = snapshots
            .order((date.asc(), id.asc()))
            .select(SnapshotDB::as_select())
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Snapshot::from).collect())
    }

    fn list_recent(&self, limit: i64) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = snapshots
            .order((date.desc(), id.desc()))
            .limit(limit)
            .select(SnapshotDB::as_select())
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Snapshot::from).collect())
    }

    async fn create(&self, input: ValidatedSnapshot) -> Result<Snapshot> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Snapshot> {
                let new_row: NewSnapshotDB = input.into();
                let stored = diesel::insert_into(snapshots::table)
                    .values(&new_row)
                    .returning(SnapshotDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                debug!("Inserted snapshot {}", stored.id);
                Ok(Snapshot::from(stored))
            })
            .await
    }

    async fn delete(&self, snapshot_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(snapshots.find(snapshot_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
