use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{ALL_SITES_VALUE, LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Value of the site dropdown: every site, or exactly one.
///
/// Serialised as the dropdown value, i.e. `"ALL"` or the site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES_VALUE.to_string(),
            SiteSelection::Site(s) => s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES_VALUE),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Inclusive payload interval in kilograms, as selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Swap the ends if they arrive reversed. Slider widgets never produce a
    /// reversed pair, but the HTTP surface accepts arbitrary values.
    pub fn normalized(self) -> Self {
        if self.low <= self.high {
            self
        } else {
            PayloadRange {
                low: self.high,
                high: self.low,
            }
        }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        PayloadRange { low, high }
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Records launched from the selected site, in dataset order.
pub fn records_for_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records().iter().filter(move |r| site.matches(r))
}

/// Records passing both the payload interval and the site selection,
/// in dataset order.
pub fn records_in_range<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg))
        .filter(move |r| site.matches(r))
}
