//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the CLI's JSON
//! output or to the browser as-is.

use serde::Serialize;

/// A stored observation row, as returned by `query_observations`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObservationRow {
    /// Calendar date (YYYY-MM-DD).
    pub date: String,
    pub region: String,
    pub estimated_fire_area: Option<f64>,
    pub pixel_count: Option<f64>,
    /// 1-based calendar month.
    pub month: u32,
    pub year: i32,
}

/// Row count and year span for one region.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub rows: i64,
    pub first_year: i32,
    pub last_year: i32,
}
