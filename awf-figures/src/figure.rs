//! Serializable Plotly figure descriptions.
//!
//! Only the attributes the dashboard sets are modelled. The serialized form
//! is passed straight to `Plotly.react(container, data, layout)`.

use serde::Serialize;

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// JSON text of the trace list.
    pub fn data_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }

    /// JSON text of the layout.
    pub fn layout_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.layout)?)
    }

    /// True when no trace carries any point.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|trace| match trace {
            Trace::Pie(pie) => pie.values.is_empty(),
            Trace::Bar(bar) => bar.y.is_empty(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out of the middle (donut hole).
    pub hole: f64,
    pub textinfo: String,
    pub textposition: String,
    /// Plotly sorts slices by value unless told not to; keep the given order.
    pub sort: bool,
    pub direction: String,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: BarMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub showlegend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

/// Margins shared by both dashboard charts.
pub const CHART_MARGIN: Margin = Margin {
    t: 60,
    b: 40,
    l: 40,
    r: 40,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryarray: Option<Vec<String>>,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: AxisTitle {
                text: text.to_string(),
            },
            categoryorder: None,
            categoryarray: None,
        }
    }

    /// Pin category order to `categories`, whatever order the data arrives in.
    pub fn with_category_order(mut self, categories: Vec<String>) -> Self {
        self.categoryorder = Some("array".to_string());
        self.categoryarray = Some(categories);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}
