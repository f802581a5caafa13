//! Chart descriptions and the selection callback for the wildfire dashboard.
//!
//! This crate provides:
//! - `figure`: serializable Plotly figure descriptions (`{"data": [...], "layout": {...}}`)
//! - `palette`: chart colors
//! - `charts`: pie and bar figures built from monthly tables
//! - `callback`: `update_graphs`, selection in, two figures and two titles out

pub mod callback;
pub mod charts;
pub mod figure;
pub mod palette;

pub use callback::{update_graphs, DashboardUpdate};
