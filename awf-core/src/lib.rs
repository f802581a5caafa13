//! Core types for the Australian wildfire dashboard.
//!
//! - `month`: the canonical January..December sequence
//! - `dates`: parsing of the date formats found in the observation CSV
//! - `observation`: one CSV row with its derived `Month` and `Year`
//! - `dataset`: the read-only collection loaded once at startup
//! - `selection`: the (region, year) pair chosen in the UI

pub mod dataset;
pub mod dates;
pub mod error;
pub mod month;
pub mod observation;
pub mod selection;

pub use dataset::Dataset;
pub use error::DataError;
pub use month::{Month, MONTH_ORDER};
pub use observation::Observation;
pub use selection::Selection;
