//! Renderer-agnostic chart descriptions.
//!
//! A [`Figure`] holds one or more [`Panel`]s laid out on a grid; each panel
//! carries its line traces, filled bands, reference markers and horizontal
//! bars. Everything serializes to JSON so any plotting front end can draw it.

use serde::Serialize;

use crate::common::enums::LineStyle;

pub const COLOR_PRIMARY: &str = "#d98600";
pub const COLOR_SECONDARY: &str = "#4aa8ff";
pub const COLOR_TREND: &str = "green";
pub const COLOR_ALERT: &str = "red";

/// Asset colors in assignment order
pub const ASSET_PALETTE: [&str; 6] = [
    COLOR_PRIMARY,
    COLOR_SECONDARY,
    "#6bbf59",
    "#b05cc6",
    "#e05a47",
    "#7f7f7f",
];

pub fn asset_color(index: usize) -> &'static str {
    ASSET_PALETTE[index % ASSET_PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub label: Option<String>,
    pub color: String,
    pub style: LineStyle,
    pub points: Vec<[f64; 2]>,
}

impl Trace {
    pub fn line(label: Option<&str>, color: &str, points: Vec<[f64; 2]>) -> Self {
        Self {
            label: label.map(str::to_string),
            color: color.to_string(),
            style: LineStyle::Solid,
            points,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.style = LineStyle::Dashed;
        self
    }
}

/// Area between `lower` and `upper` at each x
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub label: Option<String>,
    pub color: String,
    pub alpha: f64,
    pub x: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    VerticalLine {
        x: f64,
        color: String,
        style: LineStyle,
        width: f64,
        label: Option<String>,
    },
    HorizontalLine {
        y: f64,
        color: String,
        style: LineStyle,
        label: Option<String>,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: String,
        font_size: u32,
    },
}

/// Horizontal date bar of a Gantt panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub start: String,
    pub end: String,
    pub duration_days: i64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub legend: bool,
    pub traces: Vec<Trace>,
    pub bands: Vec<Band>,
    pub markers: Vec<Marker>,
    pub bars: Vec<Bar>,
    /// Explicit x tick labels; empty leaves ticks to the renderer
    pub x_ticks: Vec<String>,
    pub x_tick_rotation: f64,
}

impl Panel {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid: true,
            legend: false,
            traces: Vec::new(),
            bands: Vec::new(),
            markers: Vec::new(),
            bars: Vec::new(),
            x_ticks: Vec::new(),
            x_tick_rotation: 0.0,
        }
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub width_in: f64,
    pub height_in: f64,
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` entries
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn single(width_in: f64, height_in: f64, panel: Panel) -> Self {
        Self {
            title: panel.title.clone(),
            width_in,
            height_in,
            rows: 1,
            cols: 1,
            panels: vec![panel],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
