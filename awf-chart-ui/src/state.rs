//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use awf_core::selection::DEFAULT_YEAR;
use awf_core::Selection;
use awf_db::Database;
use dioxus::prelude::*;

/// Shared application state for the wildfire dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected region code
    pub selected_region: Signal<String>,
    /// Currently selected year
    pub selected_year: Signal<i32>,
    /// Region codes offered by the radio group (first-seen order)
    pub regions: Signal<Vec<String>>,
    /// Years offered by the dropdown (ascending)
    pub years: Signal<Vec<i32>>,
    /// Title above the fire area pie
    pub fire_area_title: Signal<String>,
    /// Title above the fire pixel bar chart
    pub fire_pixel_title: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_region: Signal::new(String::new()),
            selected_year: Signal::new(DEFAULT_YEAR),
            regions: Signal::new(Vec::new()),
            years: Signal::new(Vec::new()),
            fire_area_title: Signal::new(String::new()),
            fire_pixel_title: Signal::new(String::new()),
        }
    }

    /// The current control values as a selection.
    pub fn selection(&self) -> Selection {
        Selection::new((self.selected_region)(), (self.selected_year)())
    }
}
