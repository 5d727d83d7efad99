//! Database models for snapshots.

use chrono::NaiveDate;
use diesel::prelude::*;

use snapfolio_core::snapshots::{Snapshot, ValidatedSnapshot};

/// Database model for a stored snapshot row
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: i32,
    pub asset_category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Database model for inserting a snapshot; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::snapshots)]
pub struct NewSnapshotDB {
    pub asset_category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl From<SnapshotDB> for Snapshot {
    fn from(db: SnapshotDB) -> Self {
        Self {
            id: db.id,
            asset_category: db.asset_category,
            amount: db.amount,
            date: db.date,
        }
    }
}

impl From<ValidatedSnapshot> for NewSnapshotDB {
    fn from(domain: ValidatedSnapshot) -> Self {
        Self {
            asset_category: domain.asset_category,
            amount: domain.amount,
            date: domain.date,
        }
    }
}
