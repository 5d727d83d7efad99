//! Chart series reshaping.
//!
//! Turns a flat snapshot list into date-indexed rows: sparse per-category values
//! for line charts and a fill-forward total for the aggregate view.

mod series_builder;
mod series_model;

pub use series_builder::*;
pub use series_model::*;

#[cfg(test)]
mod series_builder_tests;
