//! `summary` subcommand: what the dashboard controls will offer.

use crate::DataArgs;
use awf_core::Dataset;
use awf_db::models::RegionSummary;
use awf_db::Database;
use std::fmt::Write as _;

/// Text report of the dataset: totals, then one line per region.
pub fn format_summary(dataset: &Dataset, regions: &[RegionSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Observations: {}", dataset.len());
    match (dataset.years().first(), dataset.years().last()) {
        (Some(first), Some(last)) => {
            let _ = writeln!(out, "Years: {}-{} ({} distinct)", first, last, dataset.years().len());
        }
        _ => {
            let _ = writeln!(out, "Years: none");
        }
    }
    let _ = writeln!(out, "Regions: {}", dataset.regions().join(", "));
    if let Some(default) = dataset.default_selection() {
        let _ = writeln!(out, "Default selection: {}", default);
    }
    for summary in regions {
        let _ = writeln!(
            out,
            "  {:<4} {:>7} rows  {}-{}",
            summary.region, summary.rows, summary.first_year, summary.last_year
        );
    }
    out
}

pub fn run_summary(data: &DataArgs) -> anyhow::Result<()> {
    let dataset = Dataset::from_path(&data.data)?;
    let db = Database::new()?;
    db.load_dataset(&dataset)?;
    let regions = db.query_region_summaries()?;
    print!("{}", format_summary(&dataset, &regions));
    Ok(())
}
