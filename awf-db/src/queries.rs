//! Typed query methods for retrieving wildfire data from the database.
//!
//! Month numbers are stored 1..=12, so `ORDER BY month` yields the canonical
//! January..December order regardless of which months have rows.

use crate::models::{ObservationRow, RegionSummary};
use crate::Database;
use awf_core::{Month, Selection};
use awf_data::aggregation::{Metric, MonthlyMean, MonthlyTable};
use rusqlite::params;

/// Column holding a metric in the `observations` table.
fn metric_column(metric: Metric) -> &'static str {
    match metric {
        Metric::FireArea => "estimated_fire_area",
        Metric::PixelCount => "pixel_count",
    }
}

impl Database {
    /// Distinct regions in the order they first appear in the CSV.
    pub fn query_regions(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region FROM observations
             GROUP BY region
             ORDER BY MIN(seq)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::debug!("query: query_regions returned {} records", rows.len());
        Ok(rows)
    }

    /// Distinct years, ascending.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM observations ORDER BY year")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        log::debug!("query: query_years returned {} records", rows.len());
        Ok(rows)
    }

    /// Rows matching the selection exactly, in file order.
    pub fn query_observations(&self, selection: &Selection) -> anyhow::Result<Vec<ObservationRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, region, estimated_fire_area, pixel_count, month, year
             FROM observations
             WHERE region = ?1 AND year = ?2
             ORDER BY seq",
        )?;
        let rows = stmt
            .query_map(params![selection.region, selection.year], |row| {
                Ok(ObservationRow {
                    date: row.get(0)?,
                    region: row.get(1)?,
                    estimated_fire_area: row.get(2)?,
                    pixel_count: row.get(3)?,
                    month: row.get(4)?,
                    year: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_observations({}) returned {} records",
            selection,
            rows.len()
        );
        Ok(rows)
    }

    /// Mean of `metric` per month for the selection, via SQL `AVG`.
    ///
    /// NULL values are skipped and months without any value are absent; no
    /// matching rows gives an empty table.
    pub fn query_monthly_means(
        &self,
        selection: &Selection,
        metric: Metric,
    ) -> anyhow::Result<MonthlyTable> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT month, AVG({col}), COUNT({col})
             FROM observations
             WHERE region = ?1 AND year = ?2
             GROUP BY month
             HAVING COUNT({col}) > 0
             ORDER BY month",
            col = metric_column(metric)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![selection.region, selection.year], |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, f64>(1)?, row.get::<_, i64>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = Vec::with_capacity(rows.len());
        for (month, mean, count) in rows {
            let month = Month::from_number(month)
                .ok_or_else(|| anyhow::anyhow!("month out of range in observations: {}", month))?;
            entries.push(MonthlyMean {
                month,
                mean,
                rows: count as usize,
            });
        }
        log::debug!(
            "query: query_monthly_means({}, {:?}) returned {} months",
            selection,
            metric,
            entries.len()
        );
        Ok(MonthlyTable::from_unordered(entries))
    }

    /// Row count and year span per region, regions in first-seen order.
    pub fn query_region_summaries(&self) -> anyhow::Result<Vec<RegionSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region, COUNT(*), MIN(year), MAX(year)
             FROM observations
             GROUP BY region
             ORDER BY MIN(seq)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionSummary {
                    region: row.get(0)?,
                    rows: row.get(1)?,
                    first_year: row.get(2)?,
                    last_year: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
