//! In-memory SQLite database layer for wildfire observations.
//!
//! Loads the observation CSV into an in-memory SQLite database and answers
//! the dashboard's questions (distinct regions, distinct years, per-month
//! means for a selection) with SQL. Used by the Dioxus dashboard compiled to
//! WASM and by the CLI's `--sqlite` mode.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming app
//! - Month/year are derived once at load time and stored as columns, so the
//!   per-month means are a plain `GROUP BY month` + `AVG(...)`
//!
//! # Usage
//!
//! ```rust
//! use awf_core::{Month, Selection};
//! use awf_data::aggregation::Metric;
//! use awf_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_observations("Region,Date,Estimated_fire_area,Count\nNT,2012-01-03,2.0,5\nNT,2012-01-09,4.0,7\n").unwrap();
//!
//! let table = db
//!     .query_monthly_means(&Selection::new("NT", 2012), Metric::FireArea)
//!     .unwrap();
//! assert_eq!(table.get(Month::January), Some(3.0));
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use awf_core::Selection;
use awf_data::aggregation::{Metric, MonthlyTable};
use awf_data::source::MonthlySource;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the wildfire observations.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl MonthlySource for Database {
    fn monthly_means(&self, selection: &Selection, metric: Metric) -> anyhow::Result<MonthlyTable> {
        self.query_monthly_means(selection, metric)
    }
}

// PartialEq by identity so the database can sit in Dioxus props and signals.
impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_observations("Region,Date,Estimated_fire_area,Count\nNT,2012-01-03,2.0,5\n")
            .unwrap();
        let regions = db2.query_regions().unwrap();
        assert_eq!(regions, vec!["NT".to_string()], "Clone should see same data via shared Rc");
        assert!(db == db2);
        assert!(db != Database::new().unwrap());
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_regions().unwrap().is_empty());
        assert!(db.query_years().unwrap().is_empty());
    }
}
