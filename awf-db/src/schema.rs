//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// `observations` keeps one row per CSV row. `seq` preserves file order so
/// that distinct regions can be listed in first-seen order. `month` is the
/// 1-based calendar month, so `ORDER BY month` is the canonical month order.
/// Blank metric cells are stored as NULL, which `AVG` skips.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS observations (
        seq INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        region TEXT NOT NULL,
        estimated_fire_area REAL,
        pixel_count REAL,
        month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
        year INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_obs_region_year ON observations(region, year);
    CREATE INDEX IF NOT EXISTS idx_obs_year ON observations(year);
    "#
}
