//! Australian Wildfire Analysis Dashboard
//!
//! Two linked charts over the wildfire observation dataset: a donut chart of
//! the average estimated fire area per month and a bar chart of the average
//! fire pixel count per month. A region radio group and a year dropdown pick
//! which rows are averaged; both charts and their titles are redrawn on every
//! change.
//!
//! Data flow:
//! 1. `build.rs` copies `wildfire_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed once, the control options and defaults are
//!    taken from it, and the rows are loaded into an in-memory SQLite database.
//! 4. When the selection changes, `update_graphs()` is run against the
//!    database and the resulting figures are handed to Plotly.

use awf_chart_ui::components::{
    ChartPanel, ErrorDisplay, LoadingSpinner, PageHeader, RegionSelector, YearSelector,
};
use awf_chart_ui::js_bridge;
use awf_chart_ui::state::AppState;
use awf_core::Dataset;
use awf_db::Database;
use awf_figures::update_graphs;
use dioxus::prelude::*;

/// Wildfire observations, one row per region per day.
const WILDFIRE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/wildfire_data.csv"));

/// DOM ids Plotly renders into.
const PIE_ID: &str = "fire-area-pie";
const BAR_ID: &str = "fire-pixel-bar";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wildfire-dashboard-root"))
        .launch(App);
}

/// Parse the embedded CSV and load it into a fresh database.
fn load_data() -> anyhow::Result<(Dataset, Database)> {
    if WILDFIRE_CSV.trim().is_empty() {
        anyhow::bail!("no wildfire data was embedded at build time");
    }
    let dataset = Dataset::from_csv_str(WILDFIRE_CSV)?;
    let db = Database::new()?;
    db.load_dataset(&dataset)?;
    Ok((dataset, db))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        match load_data() {
            Ok((dataset, db)) => {
                match dataset.default_selection() {
                    Some(selection) => {
                        log::info!("Default selection: {}", selection);
                        state.selected_region.set(selection.region);
                        state.selected_year.set(selection.year);
                    }
                    None => {
                        state
                            .error_msg
                            .set(Some("The wildfire dataset contains no observations.".to_string()));
                    }
                }
                state.regions.set(dataset.regions().to_vec());
                state.years.set(dataset.years().to_vec());
                state.db.set(Some(db));
            }
            Err(e) => {
                log::error!("Failed to load wildfire data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load wildfire data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Redraw both charts and titles whenever the region or year changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let selection = state.selection();
        if selection.region.is_empty() {
            return;
        }

        js_bridge::init_charts();

        match update_graphs(&db, &selection) {
            Ok(update) => {
                log::info!(
                    "Rendering {}: {} area months, {} pixel months",
                    selection,
                    update.fire_area_table.len(),
                    update.fire_pixel_table.len()
                );
                state.fire_area_title.set(update.fire_area_title);
                state.fire_pixel_title.set(update.fire_pixel_title);
                js_bridge::render_figure(PIE_ID, &update.fire_area_pie);
                js_bridge::render_figure(BAR_ID, &update.fire_pixel_bar);
            }
            Err(e) => {
                log::error!("Failed to aggregate {}: {}", selection, e);
                js_bridge::destroy_chart(PIE_ID);
                js_bridge::destroy_chart(BAR_ID);
                state
                    .error_msg
                    .set(Some(format!("Failed to aggregate {}: {}", selection, e)));
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader { title: "Australian Wildfire Analysis Dashboard".to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                RegionSelector {}
                YearSelector {}

                div {
                    style: "padding: 2em;",
                    ChartPanel {
                        chart_id: PIE_ID.to_string(),
                        title_id: "fire-area-title".to_string(),
                        title: (state.fire_area_title)(),
                    }
                    ChartPanel {
                        chart_id: BAR_ID.to_string(),
                        title_id: "fire-pixel-title".to_string(),
                        title: (state.fire_pixel_title)(),
                    }
                }
            }
        }
    }
}
