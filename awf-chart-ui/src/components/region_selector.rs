//! Inline radio group for choosing a region.

use crate::state::AppState;
use dioxus::prelude::*;

/// Region radio group.
/// Reads available regions from AppState and updates selected_region on change.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions = state.regions.read().clone();
    let selected = (state.selected_region)();

    rsx! {
        div {
            style: "padding: 1em;",
            label {
                style: "font-weight: bold; margin-right: 8px;",
                "Select a Region:"
            }
            for region in regions.into_iter() {
                label {
                    key: "{region}",
                    style: "margin-right: 12px;",
                    input {
                        r#type: "radio",
                        name: "input-region",
                        value: "{region}",
                        checked: region == selected,
                        onchange: {
                            let region = region.clone();
                            move |_| state.selected_region.set(region.clone())
                        },
                    }
                    " {region}"
                }
            }
        }
    }
}
