//! Chart specifications produced by the reactive handlers.
//!
//! A handler never draws anything: it returns one of these values and the UI
//! layer renders it. Every type here is plain data, serialised as JSON for
//! the browser page.

pub mod outcome;
pub mod payload;

use serde::{Deserialize, Serialize};

pub use outcome::outcome_summary;
pub use payload::payload_outcome;

/// A renderable chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(p) => &p.title,
            Figure::Scatter(s) => &s.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Pie(p) => p.slices.is_empty(),
            Figure::Scatter(s) => s.points.is_empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: String,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Colour categories present in `points`, in order of first appearance.
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Outcome class, 0 or 1.
    pub y: u8,
    /// Booster version category; selects the marker colour.
    pub category: String,
    /// Shown on hover only.
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub category: String,
    pub color: String,
}
