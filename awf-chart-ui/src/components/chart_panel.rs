//! A titled chart: `h3` heading above the element Plotly draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id of the chart element (passed to `js_bridge::render_figure`)
    pub chart_id: String,
    /// DOM id of the heading
    pub title_id: String,
    /// Heading text; empty until the first render
    pub title: String,
    #[props(default = 450)]
    pub min_height: u32,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let chart_style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        section {
            style: "margin-bottom: 24px;",
            h3 {
                id: "{props.title_id}",
                style: "text-align: center; margin-bottom: 10px;",
                "{props.title}"
            }
            if props.title.is_empty() {
                p { style: "text-align: center; color: #666;", "Preparing chart..." }
            }
            // Plotly owns this element's children
            div {
                id: "{props.chart_id}",
                style: "{chart_style}",
            }
        }
    }
}
