use super::*;
use crate::snapshots::Snapshot;
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn snap(id: i32, category: &str, amount: f64, day: &str) -> Snapshot {
    Snapshot {
        id,
        asset_category: category.to_string(),
        amount,
        date: date(day),
    }
}

#[test]
fn test_empty_input() {
    let series = build_portfolio_series(&[]);
    assert!(series.categories.is_empty());
    assert!(series.rows.is_empty());
}

#[test]
fn test_fill_forward_total_with_sparse_category_rows() {
    // A reports on days 1 and 3, B only on day 2.
    let series = build_portfolio_series(&[
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "B", 50.0, "2024-01-02"),
        snap(3, "A", 120.0, "2024-01-03"),
    ]);

    assert_eq!(series.categories, vec!["A", "B"]);
    assert_eq!(series.rows.len(), 3);

    let day1 = &series.rows[0];
    assert_eq!(day1.date, date("2024-01-01"));
    assert_eq!(day1.amount_for("A"), Some(100.0));
    assert_eq!(day1.amount_for("B"), None);
    assert_eq!(day1.total_value, 100.0);

    let day2 = &series.rows[1];
    assert_eq!(day2.amount_for("A"), None);
    assert_eq!(day2.amount_for("B"), Some(50.0));
    assert_eq!(day2.total_value, 150.0);

    let day3 = &series.rows[2];
    assert_eq!(day3.amount_for("A"), Some(120.0));
    assert_eq!(day3.amount_for("B"), None);
    assert_eq!(day3.total_value, 170.0);
}

#[test]
fn test_rows_sorted_by_date_regardless_of_input_order() {
    let series = build_portfolio_series(&[
        snap(1, "Gold", 10.0, "2024-03-01"),
        snap(2, "Gold", 5.0, "2023-12-31"),
        snap(3, "FD", 7.0, "2024-01-15"),
    ]);

    let dates: Vec<NaiveDate> = series.rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date("2023-12-31"), date("2024-01-15"), date("2024-03-01")]
    );
    // Gold is seen first in the input even though FD is not the earliest date.
    assert_eq!(series.categories, vec!["Gold", "FD"]);
    assert_eq!(series.rows[1].total_value, 12.0);
    assert_eq!(series.rows[2].total_value, 17.0);
}

#[test]
fn test_categories_follow_first_appearance_not_date() {
    let series = build_portfolio_series(&[
        snap(1, "Stocks", 1.0, "2024-05-01"),
        snap(2, "Crypto", 1.0, "2024-01-01"),
        snap(3, "Stocks", 1.0, "2024-02-01"),
        snap(4, "FD", 1.0, "2023-01-01"),
    ]);
    assert_eq!(series.categories, vec!["Stocks", "Crypto", "FD"]);
}

#[test]
fn test_same_category_same_date_last_input_wins() {
    let series = build_portfolio_series(&[
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "A", 250.0, "2024-01-01"),
    ]);
    assert_eq!(series.rows.len(), 1);
    assert_eq!(series.rows[0].amount_for("A"), Some(250.0));
    assert_eq!(series.rows[0].total_value, 250.0);
}

#[test]
fn test_category_without_history_contributes_nothing() {
    let series = build_portfolio_series(&[
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "B", 40.0, "2024-02-01"),
    ]);
    assert_eq!(series.rows[0].total_value, 100.0);
    assert_eq!(series.rows[1].total_value, 140.0);
}

#[test]
fn test_zero_amount_replaces_previous_value() {
    let series = build_portfolio_series(&[
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "B", 30.0, "2024-01-01"),
        snap(3, "A", 0.0, "2024-02-01"),
    ]);
    assert_eq!(series.rows[1].amount_for("A"), Some(0.0));
    assert_eq!(series.rows[1].total_value, 30.0);
}

#[test]
fn test_idempotent() {
    let snapshots = vec![
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "B", 50.0, "2024-01-02"),
        snap(3, "A", 120.0, "2024-01-03"),
    ];
    assert_eq!(
        build_portfolio_series(&snapshots),
        build_portfolio_series(&snapshots)
    );
}

#[test]
fn test_series_serializes_sparse_rows() {
    let series = build_portfolio_series(&[
        snap(1, "A", 100.0, "2024-01-01"),
        snap(2, "B", 50.0, "2024-01-02"),
    ]);
    let json = serde_json::to_value(&series).unwrap();

    assert_eq!(json["categories"], serde_json::json!(["A", "B"]));
    assert_eq!(json["rows"][1]["date"], "2024-01-02");
    assert_eq!(json["rows"][1]["totalValue"], 150.0);
    assert_eq!(
        json["rows"][1]["amountByCategory"],
        serde_json::json!({ "B": 50.0 })
    );
}
