use awf_figures::palette::HEADING_COLOR;
use dioxus::prelude::*;

/// Dashboard `h1` heading.
#[component]
pub fn PageHeader(title: String) -> Element {
    rsx! {
        h1 {
            style: "text-align: center; color: {HEADING_COLOR}; font-size: 26px;",
            "{title}"
        }
    }
}
