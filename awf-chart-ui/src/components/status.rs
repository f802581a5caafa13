//! Load and failure states shown in place of the controls and charts.

use dioxus::prelude::*;

/// Shown while the embedded CSV is parsed and loaded.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "text-align: center; padding: 40px; color: #666;",
            "Loading wildfire observations..."
        }
    }
}

/// A load or aggregation failure. The dashboard has no retry path, so the
/// message is the whole page body.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FDECEA; color: #8B1A1A; border-left: 4px solid #8B1A1A;",
            strong { "Dashboard unavailable: " }
            "{message}"
        }
    }
}
