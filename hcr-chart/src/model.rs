//! Declarative chart descriptions.
//!
//! A [`ChartDescription`] says what to draw, never how. The renderer reads
//! `kind`, `title`, `axis_labels`, `color_scale` and `series`; an empty
//! `series` with a `note` is a valid chart meaning "nothing to show".

use serde::{Deserialize, Serialize};

/// Which visual the renderer should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Choropleth,
    Bar,
    Scatter,
}

/// Axis and legend captions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One drawable element of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mark", rename_all = "snake_case")]
pub enum Mark {
    /// A shaded map region. `value: None` is drawn as "no data".
    Area {
        region: String,
        year: i32,
        value: Option<f64>,
    },
    /// One bar per region. `value: None` is drawn as "no data".
    Bar { region: String, value: Option<f64> },
    /// A sized scatter point; only complete rows become points.
    Point {
        region: String,
        x: f64,
        y: f64,
        size: f64,
    },
}

impl Mark {
    pub fn region(&self) -> &str {
        match self {
            Mark::Area { region, .. } | Mark::Bar { region, .. } | Mark::Point { region, .. } => {
                region
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub title: String,
    pub axis_labels: AxisLabels,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<String>,
    pub series: Vec<Mark>,
    /// Message shown in place of the marks when `series` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ChartDescription {
    pub fn new(kind: ChartKind, title: impl Into<String>, axis_labels: AxisLabels) -> Self {
        Self {
            kind,
            title: title.into(),
            axis_labels,
            color_scale: None,
            series: Vec::new(),
            note: None,
        }
    }

    pub fn with_color_scale(mut self, scale: impl Into<String>) -> Self {
        self.color_scale = Some(scale.into());
        self
    }

    /// Attach the marks. An empty series gets `empty_note` so the renderer
    /// can show an explicit empty chart.
    pub fn with_series(mut self, series: Vec<Mark>, empty_note: impl Into<String>) -> Self {
        self.note = if series.is_empty() {
            Some(empty_note.into())
        } else {
            None
        };
        self.series = series;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Regions in series order.
    pub fn regions(&self) -> Vec<&str> {
        self.series.iter().map(Mark::region).collect()
    }
}
