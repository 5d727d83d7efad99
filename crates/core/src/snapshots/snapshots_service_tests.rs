//! Unit tests for the snapshot service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockSnapshotRepository {
    snapshots: Mutex<Vec<Snapshot>>,
}

impl MockSnapshotRepository {
    fn stored(&self) -> Vec<Snapshot> {
        self.snapshots.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for MockSnapshotRepository {
    fn list(&self) -> Result<Vec<Snapshot>> {
        let mut snapshots = self.stored();
        snapshots.sort_by_key(|s| (s.date, s.id));
        Ok(snapshots)
    }

    fn list_recent(&self, limit: i64) -> Result<Vec<Snapshot>> {
        let mut snapshots = self.list()?;
        snapshots.reverse();
        snapshots.truncate(limit as usize);
        Ok(snapshots)
    }

    async fn create(&self, input: ValidatedSnapshot) -> Result<Snapshot> {
        let mut snapshots = self.snapshots.lock().unwrap();
        let snapshot = Snapshot {
            id: snapshots.len() as i32 + 1,
            asset_category: input.asset_category,
            amount: input.amount,
            date: input.date,
        };
        snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn delete(&self, snapshot_id: i32) -> Result<usize> {
        let mut snapshots = self.snapshots.lock().unwrap();
        let before = snapshots.len();
        snapshots.retain(|s| s.id != snapshot_id);
        Ok(before - snapshots.len())
    }
}

fn service_with_repo() -> (SnapshotService, Arc<MockSnapshotRepository>) {
    let repo = Arc::new(MockSnapshotRepository::default());
    (SnapshotService::new(repo.clone()), repo)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_snapshot_assigns_id_and_parses_date() {
    let (service, _repo) = service_with_repo();

    let created = service
        .create_snapshot(NewSnapshot::new("Mutual Funds", 50000.0, "2024-02-29"))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.asset_category, "Mutual Funds");
    assert_eq!(created.amount, 50000.0);
    assert_eq!(created.date, date(2024, 2, 29));
}

#[tokio::test]
async fn test_create_snapshot_validation_error_never_reaches_storage() {
    let (service, repo) = service_with_repo();

    let err = service
        .create_snapshot(NewSnapshot {
            asset_category: Some("Gold".to_string()),
            amount: None,
            date: Some("2024-01-01".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(_))
    ));
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn test_delete_existing_snapshot() {
    let (service, repo) = service_with_repo();
    let created = service
        .create_snapshot(NewSnapshot::new("FD", 1000.0, "2024-01-01"))
        .await
        .unwrap();

    let outcome = service.delete_snapshot(created.id).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn test_delete_missing_snapshot_is_not_found() {
    let (service, _repo) = service_with_repo();

    let outcome = service.delete_snapshot(42).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::NotFound);
}

#[tokio::test]
async fn test_recent_snapshots_newest_first() {
    let (service, _repo) = service_with_repo();
    for (category, amount, day) in [
        ("FD", 100.0, "2024-01-03"),
        ("Gold", 200.0, "2024-01-01"),
        ("Stocks", 300.0, "2024-01-02"),
    ] {
        service
            .create_snapshot(NewSnapshot::new(category, amount, day))
            .await
            .unwrap();
    }

    let recent = service.recent_snapshots(2).unwrap();
    let categories: Vec<&str> = recent.iter().map(|s| s.asset_category.as_str()).collect();
    assert_eq!(categories, vec!["FD", "Stocks"]);

    assert!(service.recent_snapshots(0).unwrap().is_empty());
}

#[tokio::test]
async fn test_list_snapshots_is_date_ordered() {
    let (service, _repo) = service_with_repo();
    service
        .create_snapshot(NewSnapshot::new("FD", 1.0, "2024-05-01"))
        .await
        .unwrap();
    service
        .create_snapshot(NewSnapshot::new("FD", 2.0, "2024-01-01"))
        .await
        .unwrap();

    let listed = service.list_snapshots().unwrap();
    assert_eq!(listed[0].date, date(2024, 1, 1));
    assert_eq!(listed[1].date, date(2024, 5, 1));
}

#[test]
fn test_asset_categories_lists_curated_entries() {
    let (service, _repo) = service_with_repo();
    let categories = service.asset_categories();
    assert_eq!(categories.len(), 6);
    assert!(categories.contains(&service.default_asset_category()));
    assert_eq!(service.default_asset_category(), "Mutual Funds");
}
