//! Snapshot domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::errors::ValidationError;

/// A single point-in-time recorded value for one asset category.
///
/// Snapshots are immutable once stored; the only mutation is deletion by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: i32,
    pub asset_category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Raw input for logging a new snapshot, as submitted by the entry form.
///
/// Every field is optional here so that a missing field is reported as a
/// validation error instead of a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewSnapshot {
    #[serde(alias = "asset_type", alias = "asset_category")]
    pub asset_category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// A snapshot input that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSnapshot {
    pub asset_category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Result of deleting a snapshot by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl NewSnapshot {
    pub fn new(asset_category: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            asset_category: Some(asset_category.into()),
            amount: Some(amount),
            date: Some(date.into()),
        }
    }

    /// Checks required fields and value ranges.
    ///
    /// The category is trimmed; blank strings count as missing. Amounts must be
    /// finite and positive, and the date must be a `YYYY-MM-DD` calendar day.
    pub fn validate(&self) -> Result<ValidatedSnapshot, ValidationError> {
        let asset_category = self
            .asset_category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .ok_or_else(|| ValidationError::MissingField("assetCategory".to_string()))?;

        let amount = self
            .amount
            .ok_or_else(|| ValidationError::MissingField("amount".to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be a positive number, got {}",
                amount
            )));
        }

        let raw_date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
            .ok_or_else(|| ValidationError::MissingField("date".to_string()))?;
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)?;

        Ok(ValidatedSnapshot {
            asset_category: asset_category.to_string(),
            amount,
            date,
        })
    }
}
