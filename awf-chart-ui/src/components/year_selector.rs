//! Dropdown selector for choosing a year.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year dropdown. Always holds a value (no empty option).
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<i32>() {
            Ok(year) => state.selected_year.set(year),
            Err(e) => log::warn!("ignoring year '{}': {}", evt.value(), e),
        }
    };

    rsx! {
        div {
            style: "padding: 1em;",
            label {
                r#for: "input-year",
                style: "font-weight: bold; margin-right: 8px;",
                "Select a Year:"
            }
            select {
                id: "input-year",
                onchange: on_change,
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
