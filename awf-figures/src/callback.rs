//! The selection callback: filter, group by month, average, chart.

use crate::charts::{fire_area_pie, fire_pixel_bar};
use crate::figure::Figure;
use awf_core::Selection;
use awf_data::aggregation::{Metric, MonthlyTable};
use awf_data::source::MonthlySource;
use serde::Serialize;

/// Everything the dashboard redraws when the selection changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub selection: Selection,
    pub fire_area_pie: Figure,
    pub fire_pixel_bar: Figure,
    pub fire_area_title: String,
    pub fire_pixel_title: String,
    /// Mean `Estimated_fire_area` per month behind the pie.
    pub fire_area_table: MonthlyTable,
    /// Mean `Count` per month behind the bar chart.
    pub fire_pixel_table: MonthlyTable,
}

pub fn fire_area_title(selection: &Selection) -> String {
    format!(
        "Average Monthly Fire Area in {}, {}",
        selection.region, selection.year
    )
}

pub fn fire_pixel_title(selection: &Selection) -> String {
    format!(
        "Average Monthly Fire Pixel Count in {}, {}",
        selection.region, selection.year
    )
}

/// Recompute both charts and both titles for a selection.
///
/// Reads `source` only. A selection with no rows is not an error: it gives
/// empty tables, empty figures and the usual titles.
pub fn update_graphs<S>(source: &S, selection: &Selection) -> anyhow::Result<DashboardUpdate>
where
    S: MonthlySource + ?Sized,
{
    let fire_area_table = source.monthly_means(selection, Metric::FireArea)?;
    let fire_pixel_table = source.monthly_means(selection, Metric::PixelCount)?;

    if fire_area_table.is_empty() {
        log::info!("no observations for {}, rendering empty charts", selection);
    }

    Ok(DashboardUpdate {
        selection: selection.clone(),
        fire_area_pie: fire_area_pie(&fire_area_table),
        fire_pixel_bar: fire_pixel_bar(&fire_pixel_table),
        fire_area_title: fire_area_title(selection),
        fire_pixel_title: fire_pixel_title(selection),
        fire_area_table,
        fire_pixel_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use awf_core::{Dataset, Month, MONTH_ORDER};

    const CSV: &str = "\
Region,Date,Estimated_fire_area,Count
NT,2012-01-15,2.0,4
NT,2012-01-20,4.0,6
NT,2012-08-02,9.0,3
NT,2012-02-11,1.0,1
WA,2012-01-20,100.0,100
NT,2013-01-20,50.0,50
";

    #[test]
    fn nt_2012_january_area_is_mean_of_rows() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let update = update_graphs(&dataset, &Selection::new("NT", 2012)).unwrap();
        assert_eq!(update.fire_area_table.get(Month::January), Some(3.0));
        assert_eq!(update.fire_pixel_table.get(Month::January), Some(5.0));
        assert_eq!(update.fire_area_title, "Average Monthly Fire Area in NT, 2012");
        assert_eq!(
            update.fire_pixel_title,
            "Average Monthly Fire Pixel Count in NT, 2012"
        );
    }

    #[test]
    fn tables_follow_canonical_month_order() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let update = update_graphs(&dataset, &Selection::new("NT", 2012)).unwrap();
        for table in [&update.fire_area_table, &update.fire_pixel_table] {
            let months = table.months();
            assert_eq!(months, vec![Month::January, Month::February, Month::August]);
            let positions: Vec<usize> = months
                .iter()
                .map(|m| MONTH_ORDER.iter().position(|o| o == m).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let selection = Selection::new("NT", 2012);
        let first = update_graphs(&dataset, &selection).unwrap();
        let second = update_graphs(&dataset, &selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_selection_still_titles() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let update = update_graphs(&dataset, &Selection::new("TA", 1999)).unwrap();
        assert!(update.fire_area_table.is_empty());
        assert!(update.fire_pixel_table.is_empty());
        assert!(update.fire_area_pie.is_empty());
        assert!(update.fire_pixel_bar.is_empty());
        assert!(update.fire_area_title.contains("TA"));
        assert!(update.fire_area_title.contains("1999"));
        assert!(update.fire_pixel_title.contains("TA"));
        assert!(update.fire_pixel_title.contains("1999"));
    }

    #[test]
    fn update_serializes_both_figures() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let update = update_graphs(&dataset, &Selection::new("WA", 2012)).unwrap();
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["fire_area_pie"]["data"][0]["type"], "pie");
        assert_eq!(value["fire_pixel_bar"]["data"][0]["type"], "bar");
        assert_eq!(value["selection"]["region"], "WA");
    }
}
