//! Declarative description of the dashboard page.
//!
//! The page is built once from the [`DashboardContext`] and handed to the
//! browser as JSON; the browser builds the widgets from it.

use serde::Serialize;

use crate::app::DashboardContext;
use crate::data::model::{ALL_SITES_VALUE, SiteOption};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SUCCESS_PIE_ID: &str = "success-pie-chart";
pub const PAYLOAD_SCATTER_ID: &str = "success-payload-scatter-chart";

// The slider's display range is fixed and does not follow the dataset.
// Payloads above 10000 kg can be selected by the default value but not by
// dragging.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARKS: [(f64, &str); 5] = [
    (0.0, "0"),
    (2500.0, "2.5k"),
    (5000.0, "5k"),
    (7500.0, "7.5k"),
    (10000.0, "10k"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub dropdown: DropdownSpec,
    pub pie_graph_id: String,
    pub slider_label: String,
    pub slider: RangeSliderSpec,
    pub scatter_graph_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: String,
    pub options: Vec<SiteOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl PageLayout {
    pub fn build(ctx: &DashboardContext) -> Self {
        PageLayout {
            title: PAGE_TITLE.to_string(),
            dropdown: DropdownSpec {
                id: SITE_DROPDOWN_ID.to_string(),
                options: ctx.site_options().to_vec(),
                value: ALL_SITES_VALUE.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            pie_graph_id: SUCCESS_PIE_ID.to_string(),
            slider_label: "Payload range (Kg):".to_string(),
            slider: RangeSliderSpec {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: ctx.bounds().slider_value(),
                marks: SLIDER_MARKS
                    .iter()
                    .map(|(value, label)| SliderMark {
                        value: *value,
                        label: label.to_string(),
                    })
                    .collect(),
            },
            scatter_graph_id: PAYLOAD_SCATTER_ID.to_string(),
        }
    }
}
