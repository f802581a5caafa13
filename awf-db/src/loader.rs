//! Loading observations into the in-memory SQLite database.
//!
//! CSV text is parsed and validated by `awf-core` (so the SQL and in-memory
//! paths see exactly the same rows), then inserted in one transaction.
//!
//! # CSV Format
//!
//! Has headers; needs at least `Date,Region,Estimated_fire_area,Count`.
//! Extra columns are ignored.

use crate::Database;
use awf_core::dates::format_date;
use awf_core::{Dataset, Observation};
use rusqlite::params;

impl Database {
    /// Parse observation CSV text and insert every row.
    ///
    /// # Example CSV
    /// ```text
    /// Region,Date,Estimated_fire_area,Count
    /// NT,2012-01-03,2.0,5
    /// ```
    pub fn load_observations(&self, csv_data: &str) -> anyhow::Result<()> {
        let observations = Observation::parse_csv(csv_data)?;
        self.insert_observations(&observations)
    }

    /// Insert every observation of an already-loaded dataset.
    pub fn load_dataset(&self, dataset: &Dataset) -> anyhow::Result<()> {
        self.insert_observations(dataset.observations())
    }

    fn insert_observations(&self, observations: &[Observation]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO observations
                 (date, region, estimated_fire_area, pixel_count, month, year)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for obs in observations {
                stmt.execute(params![
                    format_date(&obs.date),
                    obs.region,
                    obs.estimated_fire_area,
                    obs.count,
                    obs.month.number(),
                    obs.year,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("loader: Loaded {} observations", observations.len());
        Ok(())
    }
}
