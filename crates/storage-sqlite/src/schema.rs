//! Diesel table definitions, kept in sync with `migrations/`.

diesel::table! {
    snapshots (id) {
        id -> Integer,
        asset_category -> Text,
        amount -> Double,
        date -> Date,
    }
}
