use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{DashError, Result};

// ---------------------------------------------------------------------------
// Column names of the source table
// ---------------------------------------------------------------------------

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Value carried by the synthetic "every site" dropdown entry.
pub const ALL_SITES_VALUE: &str = "ALL";
pub const ALL_SITES_LABEL: &str = "All Sites";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing / recovery outcome. `class` is 1 for success and 0 for failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric `class` value as stored in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Parse the `class` cell. Accepts integer text ("1") and the float
    /// rendering pandas sometimes writes ("1.0").
    pub fn parse_class(raw: &str, row: usize) -> Result<Self> {
        let invalid = || DashError::InvalidOutcome {
            row,
            value: raw.to_string(),
        };
        let v: f64 = raw.trim().parse().map_err(|_| invalid())?;
        Self::from_f64(v).ok_or_else(invalid)
    }

    pub fn from_f64(v: f64) -> Option<Self> {
        if v == 1.0 {
            Some(Outcome::Success)
        } else if v == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl LaunchRecord {
    /// Validate the raw cells of one row.
    pub fn new(
        row: usize,
        launch_site: &str,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: &str,
    ) -> Result<Self> {
        if launch_site.trim().is_empty() {
            return Err(DashError::EmptyField {
                row,
                column: COL_LAUNCH_SITE.to_string(),
            });
        }
        if booster_category.trim().is_empty() {
            return Err(DashError::EmptyField {
                row,
                column: COL_BOOSTER_CATEGORY.to_string(),
            });
        }
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DashError::InvalidPayload {
                row,
                value: payload_mass_kg.to_string(),
            });
        }
        Ok(LaunchRecord {
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.to_string(),
        })
    }

    pub fn class(&self) -> u8 {
        self.outcome.class()
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Smallest and largest payload mass in the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Default slider value. The bounds are truncated to whole kilograms,
    /// so a fractional maximum falls just outside the default range.
    pub fn slider_value(&self) -> [f64; 2] {
        [self.min.trunc(), self.max.trunc()]
    }
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn all_sites() -> Self {
        SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES_VALUE.to_string(),
        }
    }

    pub fn site(name: &str) -> Self {
        SiteOption {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column summaries.
/// Never mutated after construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    sites: Vec<String>,
    /// Sorted distinct booster version categories.
    booster_categories: Vec<String>,
    bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Build the derived summaries from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DashError::EmptyDataset);
        }

        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut boosters: BTreeSet<&str> = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for r in &records {
            sites.insert(&r.launch_site);
            boosters.insert(&r.booster_category);
            min = min.min(r.payload_mass_kg);
            max = max.max(r.payload_mass_kg);
        }

        let sites = sites.into_iter().map(str::to_string).collect();
        let booster_categories = boosters.into_iter().map(str::to_string).collect();

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            bounds: PayloadBounds { min, max },
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Dropdown entries: "All Sites" followed by every site in ascending order.
    pub fn site_options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption::all_sites())
            .chain(self.sites.iter().map(|s| SiteOption::site(s)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
