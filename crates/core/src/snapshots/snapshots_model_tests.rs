//! Tests for snapshot input validation and wire format.

#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::snapshots::{NewSnapshot, Snapshot};
    use chrono::NaiveDate;

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_complete_input() {
        let input = NewSnapshot::new("  Stocks ", 2500.5, "2024-03-31")
            .validate()
            .unwrap();

        assert_eq!(input.asset_category, "Stocks");
        assert_eq!(input.amount, 2500.5);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_validate_missing_category() {
        let input = NewSnapshot {
            asset_category: None,
            amount: Some(10.0),
            date: Some("2024-01-01".to_string()),
        };
        match input.validate() {
            Err(ValidationError::MissingField(field)) => assert_eq!(field, "assetCategory"),
            other => panic!("expected missing category, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_blank_category_counts_as_missing() {
        let input = NewSnapshot::new("   ", 10.0, "2024-01-01");
        assert!(matches!(
            input.validate(),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_validate_missing_amount() {
        let input = NewSnapshot {
            asset_category: Some("Gold".to_string()),
            amount: None,
            date: Some("2024-01-01".to_string()),
        };
        match input.validate() {
            Err(ValidationError::MissingField(field)) => assert_eq!(field, "amount"),
            other => panic!("expected missing amount, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_missing_date() {
        let input = NewSnapshot {
            asset_category: Some("Gold".to_string()),
            amount: Some(1.0),
            date: None,
        };
        match input.validate() {
            Err(ValidationError::MissingField(field)) => assert_eq!(field, "date"),
            other => panic!("expected missing date, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let input = NewSnapshot::new("Crypto", 0.0, "2024-01-01");
        match input.validate() {
            Err(ValidationError::InvalidInput(msg)) => assert!(msg.contains("positive")),
            other => panic!("expected invalid amount, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let input = NewSnapshot::new("Crypto", -1.0, "2024-01-01");
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_amount() {
        let input = NewSnapshot::new("Crypto", f64::NAN, "2024-01-01");
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_impossible_date() {
        let input = NewSnapshot::new("FD", 100.0, "2023-02-30");
        assert!(matches!(input.validate(), Err(ValidationError::DateParse(_))));
    }

    #[test]
    fn test_validate_rejects_timestamp() {
        let input = NewSnapshot::new("FD", 100.0, "2023-02-01T10:00:00Z");
        assert!(matches!(input.validate(), Err(ValidationError::DateParse(_))));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_new_snapshot_accepts_legacy_field_names() {
        let legacy: NewSnapshot =
            serde_json::from_str(r#"{"asset_type":"FD","amount":1000,"date":"2024-01-01"}"#)
                .unwrap();
        assert_eq!(legacy.asset_category.as_deref(), Some("FD"));

        let snake: NewSnapshot =
            serde_json::from_str(r#"{"asset_category":"Gold","amount":5,"date":"2024-01-01"}"#)
                .unwrap();
        assert_eq!(snake.asset_category.as_deref(), Some("Gold"));

        let camel: NewSnapshot =
            serde_json::from_str(r#"{"assetCategory":"Stocks","amount":5,"date":"2024-01-01"}"#)
                .unwrap();
        assert_eq!(camel.asset_category.as_deref(), Some("Stocks"));
    }

    #[test]
    fn test_new_snapshot_missing_fields_deserialize_as_none() {
        let input: NewSnapshot = serde_json::from_str("{}").unwrap();
        assert!(input.asset_category.is_none());
        assert!(input.amount.is_none());
        assert!(input.date.is_none());
    }

    #[test]
    fn test_snapshot_serializes_iso_date() {
        let snapshot = Snapshot {
            id: 7,
            asset_category: "Real Estate".to_string(),
            amount: 125000.0,
            date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["assetCategory"], "Real Estate");
        assert_eq!(json["amount"], 125000.0);
        assert_eq!(json["date"], "2023-09-01");
    }
}
