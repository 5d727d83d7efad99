/// Day count used to turn an elapsed number of days into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Decimal places kept on presented return percentages.
pub const PERCENT_PRECISION: i32 = 2;

/// Wire and storage format of snapshot dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Asset categories offered by the entry form. The category set itself is open.
pub const ASSET_CATEGORIES: [&str; 6] = [
    "FD",
    "Mutual Funds",
    "Stocks",
    "Gold",
    "Real Estate",
    "Crypto",
];

/// Category preselected by the entry form.
pub const DEFAULT_ASSET_CATEGORY: &str = "Mutual Funds";

/// Number of entries shown in the dashboard's recent activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;
