//! `aggregate` and `figures` subcommands: run the dashboard callback once.

use crate::{DataArgs, Loaded, SelectionArgs};
use awf_core::{Dataset, Selection};
use awf_data::aggregation::MonthlyTable;
use awf_figures::{update_graphs, DashboardUpdate};
use log::{info, warn};
use std::fmt::Write as _;

/// Fill in missing region/year from the dataset defaults.
///
/// Values not present in the dataset are kept (they aggregate to empty
/// tables) but logged, since the dashboard controls could never offer them.
pub fn resolve_selection(dataset: &Dataset, args: &SelectionArgs) -> anyhow::Result<Selection> {
    let default = dataset.default_selection();
    let region = match (&args.region, &default) {
        (Some(region), _) => region.clone(),
        (None, Some(default)) => default.region.clone(),
        (None, None) => anyhow::bail!("dataset is empty; pass --region and --year explicitly"),
    };
    let year = match (args.year, &default) {
        (Some(year), _) => year,
        (None, Some(default)) => default.year,
        (None, None) => anyhow::bail!("dataset is empty; pass --region and --year explicitly"),
    };

    if !dataset.regions().contains(&region) {
        warn!("region {} does not occur in the dataset", region);
    }
    if !dataset.years().contains(&year) {
        warn!("year {} does not occur in the dataset", year);
    }
    Ok(Selection::new(region, year))
}

/// Render a monthly table as aligned text under its title.
pub fn format_monthly_table(title: &str, table: &MonthlyTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    if table.is_empty() {
        let _ = writeln!(out, "  (no observations)");
        return out;
    }
    for entry in table.iter() {
        let _ = writeln!(
            out,
            "  {:<10} {:>12.3}  ({} rows)",
            entry.month.name(),
            entry.mean,
            entry.rows
        );
    }
    out
}

fn compute(data: &DataArgs, selection: &SelectionArgs) -> anyhow::Result<DashboardUpdate> {
    let loaded = Loaded::open(data)?;
    let selection = resolve_selection(&loaded.dataset, selection)?;
    info!(
        "aggregating {} via {}",
        selection,
        if data.sqlite { "sqlite" } else { "memory" }
    );
    update_graphs(loaded.source(), &selection)
}

/// Print both monthly tables and titles for a selection.
pub fn run_aggregate(data: &DataArgs, selection: &SelectionArgs, json: bool) -> anyhow::Result<()> {
    let update = compute(data, selection)?;
    if json {
        let value = serde_json::json!({
            "selection": update.selection,
            "fire_area_title": update.fire_area_title,
            "fire_area": update.fire_area_table,
            "fire_pixel_title": update.fire_pixel_title,
            "fire_pixel": update.fire_pixel_table,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!(
            "{}",
            format_monthly_table(&update.fire_area_title, &update.fire_area_table)
        );
        println!();
        print!(
            "{}",
            format_monthly_table(&update.fire_pixel_title, &update.fire_pixel_table)
        );
    }
    Ok(())
}

/// Write the full dashboard update (figures + titles + tables) as JSON.
pub fn run_figures(
    data: &DataArgs,
    selection: &SelectionArgs,
    out: Option<&str>,
) -> anyhow::Result<()> {
    let update = compute(data, selection)?;
    let json = serde_json::to_string_pretty(&update)?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!("Wrote figures for {} to {}", update.selection, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
