//! Pie and bar figures for the two monthly tables.

use crate::figure::{
    Axis, BarMarker, BarTrace, Figure, Layout, Line, PieMarker, PieTrace, Trace, CHART_MARGIN,
};
use crate::palette::{amp_colors, BAR_COLOR, SLICE_BORDER_COLOR, SLICE_BORDER_WIDTH};
use awf_core::MONTH_ORDER;
use awf_data::aggregation::MonthlyTable;

/// Donut hole size of the fire area pie.
pub const PIE_HOLE: f64 = 0.4;

pub const BAR_X_TITLE: &str = "Month";
pub const BAR_Y_TITLE: &str = "Average Fire Pixel Count";

fn month_labels(table: &MonthlyTable) -> Vec<String> {
    table.iter().map(|e| e.month.name().to_string()).collect()
}

/// Donut chart of mean fire area per month, slices in calendar order,
/// labelled with month and percentage outside the ring.
pub fn fire_area_pie(table: &MonthlyTable) -> Figure {
    let labels = month_labels(table);
    let colors = amp_colors(labels.len());
    Figure {
        data: vec![Trace::Pie(PieTrace {
            labels,
            values: table.means(),
            hole: PIE_HOLE,
            textinfo: "percent+label".to_string(),
            textposition: "outside".to_string(),
            sort: false,
            direction: "counterclockwise".to_string(),
            marker: PieMarker {
                colors,
                line: Line {
                    color: SLICE_BORDER_COLOR.to_string(),
                    width: SLICE_BORDER_WIDTH,
                },
            },
        })],
        layout: Layout {
            margin: CHART_MARGIN,
            xaxis: None,
            yaxis: None,
            showlegend: true,
        },
    }
}

/// Bar chart of mean fire pixel count per month with the x-axis pinned to
/// the canonical month sequence.
pub fn fire_pixel_bar(table: &MonthlyTable) -> Figure {
    let all_months = MONTH_ORDER.iter().map(|m| m.name().to_string()).collect();
    Figure {
        data: vec![Trace::Bar(BarTrace {
            x: month_labels(table),
            y: table.means(),
            name: "Count".to_string(),
            marker: BarMarker {
                color: BAR_COLOR.to_string(),
            },
        })],
        layout: Layout {
            margin: CHART_MARGIN,
            xaxis: Some(Axis::titled(BAR_X_TITLE).with_category_order(all_months)),
            yaxis: Some(Axis::titled(BAR_Y_TITLE)),
            showlegend: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awf_core::Month;
    use awf_data::aggregation::MonthlyMean;
    use serde_json::json;

    fn table() -> MonthlyTable {
        MonthlyTable(vec![
            MonthlyMean { month: Month::January, mean: 3.0, rows: 2 },
            MonthlyMean { month: Month::July, mean: 1.0, rows: 1 },
            MonthlyMean { month: Month::December, mean: 6.0, rows: 4 },
        ])
    }

    #[test]
    fn pie_keeps_calendar_order_and_styling() {
        let figure = fire_area_pie(&table());
        let value = serde_json::to_value(&figure).unwrap();
        let trace = &value["data"][0];
        assert_eq!(trace["type"], json!("pie"));
        assert_eq!(trace["labels"], json!(["January", "July", "December"]));
        assert_eq!(trace["values"], json!([3.0, 1.0, 6.0]));
        assert_eq!(trace["hole"], json!(0.4));
        assert_eq!(trace["textinfo"], json!("percent+label"));
        assert_eq!(trace["textposition"], json!("outside"));
        assert_eq!(trace["sort"], json!(false));
        assert_eq!(trace["direction"], json!("counterclockwise"));
        assert_eq!(trace["marker"]["line"], json!({"color": "white", "width": 2.0}));
        assert_eq!(trace["marker"]["colors"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn bar_uses_fixed_color_and_axis_titles() {
        let figure = fire_pixel_bar(&table());
        let value = serde_json::to_value(&figure).unwrap();
        let trace = &value["data"][0];
        assert_eq!(trace["type"], json!("bar"));
        assert_eq!(trace["x"], json!(["January", "July", "December"]));
        assert_eq!(trace["y"], json!([3.0, 1.0, 6.0]));
        assert_eq!(trace["marker"]["color"], json!("darkred"));

        let layout = &value["layout"];
        assert_eq!(layout["xaxis"]["title"]["text"], json!("Month"));
        assert_eq!(layout["yaxis"]["title"]["text"], json!("Average Fire Pixel Count"));
        assert_eq!(layout["xaxis"]["categoryarray"].as_array().unwrap().len(), 12);
        assert_eq!(layout["xaxis"]["categoryarray"][0], json!("January"));
        assert_eq!(layout["xaxis"]["categoryarray"][11], json!("December"));
    }

    #[test]
    fn empty_table_gives_empty_figures() {
        let empty = MonthlyTable::default();
        assert!(fire_area_pie(&empty).is_empty());
        assert!(fire_pixel_bar(&empty).is_empty());
    }
}
