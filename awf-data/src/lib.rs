//! Monthly aggregation of wildfire observations.
//!
//! This crate turns the rows of one (region, year) selection into the
//! per-month mean tables the dashboard charts are drawn from.

/// Group-by-month mean aggregation.
pub mod aggregation {
    use awf_core::{Month, Observation, MONTH_ORDER};
    use serde::Serialize;

    /// The numeric observation field being averaged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum Metric {
        /// `Estimated_fire_area`, drives the pie chart.
        FireArea,
        /// `Count` (fire pixels), drives the bar chart.
        PixelCount,
    }

    impl Metric {
        /// Read this metric's value from an observation, `None` if missing.
        pub fn value(self, obs: &Observation) -> Option<f64> {
            match self {
                Metric::FireArea => obs.estimated_fire_area,
                Metric::PixelCount => obs.count,
            }
        }
    }

    /// Mean of one metric over the rows of a single month.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct MonthlyMean {
        pub month: Month,
        pub mean: f64,
        /// Number of values averaged; rows missing the metric are not counted.
        pub rows: usize,
    }

    /// Month → mean rows, only for months that had data, in canonical order.
    #[derive(Debug, Clone, PartialEq, Default, Serialize)]
    pub struct MonthlyTable(pub Vec<MonthlyMean>);

    impl MonthlyTable {
        /// Build a table from entries in any order; the result is sorted by
        /// the canonical month sequence.
        pub fn from_unordered(mut entries: Vec<MonthlyMean>) -> Self {
            entries.sort_by_key(|e| e.month);
            MonthlyTable(entries)
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn iter(&self) -> std::slice::Iter<'_, MonthlyMean> {
            self.0.iter()
        }

        /// Mean for a month, `None` if the month had no rows.
        pub fn get(&self, month: Month) -> Option<f64> {
            self.0.iter().find(|e| e.month == month).map(|e| e.mean)
        }

        pub fn months(&self) -> Vec<Month> {
            self.0.iter().map(|e| e.month).collect()
        }

        pub fn means(&self) -> Vec<f64> {
            self.0.iter().map(|e| e.mean).collect()
        }
    }

    /// Group rows by month and average `metric` within each group.
    ///
    /// Missing values are skipped. Months with no values are omitted; an
    /// empty input yields an empty table.
    pub fn monthly_means<'a, I>(rows: I, metric: Metric) -> MonthlyTable
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        // (sum, count) per month, indexed by month0
        let mut buckets = [(0.0f64, 0usize); 12];
        for obs in rows {
            if let Some(value) = metric.value(obs) {
                let bucket = &mut buckets[(obs.month.number() - 1) as usize];
                bucket.0 += value;
                bucket.1 += 1;
            }
        }

        let entries = MONTH_ORDER
            .iter()
            .zip(buckets.iter())
            .filter(|(_, (_, count))| *count > 0)
            .map(|(month, (sum, count))| MonthlyMean {
                month: *month,
                mean: sum / *count as f64,
                rows: *count,
            })
            .collect();
        MonthlyTable(entries)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn obs(
            y: i32,
            m: u32,
            d: u32,
            region: &str,
            area: impl Into<Option<f64>>,
            count: impl Into<Option<f64>>,
        ) -> Observation {
            Observation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), region, area, count)
        }

        #[test]
        fn january_mean_of_two_rows() {
            let rows = vec![
                obs(2012, 1, 3, "NT", 2.0, 10.0),
                obs(2012, 1, 9, "NT", 4.0, 20.0),
            ];
            let table = monthly_means(&rows, Metric::FireArea);
            assert_eq!(table.len(), 1);
            assert_eq!(table.get(Month::January), Some(3.0));
            assert_eq!(table.0[0].rows, 2);

            let pixels = monthly_means(&rows, Metric::PixelCount);
            assert_eq!(pixels.get(Month::January), Some(15.0));
        }

        #[test]
        fn output_follows_calendar_not_input_order() {
            let rows = vec![
                obs(2012, 12, 1, "NT", 1.0, 1.0),
                obs(2012, 4, 1, "NT", 1.0, 1.0),
                obs(2012, 8, 1, "NT", 1.0, 1.0),
                obs(2012, 2, 1, "NT", 1.0, 1.0),
            ];
            let table = monthly_means(&rows, Metric::FireArea);
            assert_eq!(
                table.months(),
                vec![Month::February, Month::April, Month::August, Month::December]
            );
        }

        #[test]
        fn mean_equals_sum_over_count() {
            let areas = [0.5, 13.25, 7.0, 2.125, 99.9];
            let rows: Vec<Observation> = areas
                .iter()
                .enumerate()
                .map(|(i, a)| obs(2015, 3, i as u32 + 1, "VI", *a, 1.0))
                .collect();
            let table = monthly_means(&rows, Metric::FireArea);
            let expected = areas.iter().sum::<f64>() / areas.len() as f64;
            assert!((table.get(Month::March).unwrap() - expected).abs() < 1e-9);
        }

        #[test]
        fn missing_values_are_skipped() {
            let rows = vec![
                obs(2012, 1, 3, "NT", 2.0, 10.0),
                obs(2012, 1, 5, "NT", None, 30.0),
                obs(2012, 1, 9, "NT", 4.0, None),
                obs(2012, 2, 1, "NT", None, 8.0),
            ];
            let area = monthly_means(&rows, Metric::FireArea);
            assert_eq!(area.months(), vec![Month::January]);
            assert_eq!(area.get(Month::January), Some(3.0));
            assert_eq!(area.0[0].rows, 2);

            let pixels = monthly_means(&rows, Metric::PixelCount);
            assert_eq!(pixels.get(Month::January), Some(20.0));
            assert_eq!(pixels.get(Month::February), Some(8.0));
        }

        #[test]
        fn empty_rows_give_empty_table() {
            let rows: Vec<Observation> = Vec::new();
            let table = monthly_means(&rows, Metric::PixelCount);
            assert!(table.is_empty());
            assert_eq!(table.get(Month::January), None);
        }

        #[test]
        fn from_unordered_sorts_by_month() {
            let table = MonthlyTable::from_unordered(vec![
                MonthlyMean { month: Month::October, mean: 1.0, rows: 1 },
                MonthlyMean { month: Month::January, mean: 2.0, rows: 1 },
            ]);
            assert_eq!(table.months(), vec![Month::January, Month::October]);
        }
    }
}

/// Where monthly means come from.
pub mod source {
    use crate::aggregation::{monthly_means, Metric, MonthlyTable};
    use awf_core::{Dataset, Selection};

    /// A store that can answer "mean of `metric` per month for this selection".
    ///
    /// Implemented by the in-memory [`Dataset`] here and by the SQLite
    /// database in `awf-db`.
    pub trait MonthlySource {
        fn monthly_means(&self, selection: &Selection, metric: Metric)
            -> anyhow::Result<MonthlyTable>;
    }

    impl MonthlySource for Dataset {
        fn monthly_means(
            &self,
            selection: &Selection,
            metric: Metric,
        ) -> anyhow::Result<MonthlyTable> {
            let table = monthly_means(self.filter(selection), metric);
            log::debug!(
                "{:?} for {}: {} months",
                metric,
                selection,
                table.len()
            );
            Ok(table)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use awf_core::Month;

        const SAMPLE: &str = "\
Region,Date,Estimated_fire_area,Count
NT,2012-01-15,2.0,4
NT,2012-01-20,4.0,6
NT,2012-03-02,9.0,3
WA,2012-01-20,100.0,100
NT,2013-01-20,50.0,50
";

        #[test]
        fn dataset_source_restricts_to_selection() {
            let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
            let selection = Selection::new("NT", 2012);
            let table = dataset.monthly_means(&selection, Metric::FireArea).unwrap();
            assert_eq!(table.months(), vec![Month::January, Month::March]);
            assert_eq!(table.get(Month::January), Some(3.0));
            assert_eq!(table.get(Month::March), Some(9.0));
        }

        #[test]
        fn dataset_source_skips_blank_cells() {
            let csv = "\
Region,Date,Estimated_fire_area,Count
NT,2012-01-15,2.0,4
NT,2012-01-18,,
NT,2012-01-20,4.0,6
";
            let dataset = Dataset::from_csv_str(csv).unwrap();
            let selection = Selection::new("NT", 2012);
            let area = dataset.monthly_means(&selection, Metric::FireArea).unwrap();
            assert_eq!(area.get(Month::January), Some(3.0));
            let pixels = dataset.monthly_means(&selection, Metric::PixelCount).unwrap();
            assert_eq!(pixels.get(Month::January), Some(5.0));
        }

        #[test]
        fn dataset_source_is_idempotent() {
            let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
            let selection = Selection::new("NT", 2012);
            let first = dataset.monthly_means(&selection, Metric::PixelCount).unwrap();
            let second = dataset.monthly_means(&selection, Metric::PixelCount).unwrap();
            assert_eq!(first, second);
        }
    }
}
