//! Reusable Dioxus RSX components for the wildfire dashboard.

mod chart_panel;
mod page_header;
mod region_selector;
mod status;
mod year_selector;

pub use chart_panel::ChartPanel;
pub use page_header::PageHeader;
pub use region_selector::RegionSelector;
pub use status::{ErrorDisplay, LoadingSpinner};
pub use year_selector::YearSelector;
