use std::path::Path;

use anyhow::Result;

use crate::color::ColorMap;
use crate::data::loader;
use crate::data::model::{LaunchDataset, PayloadBounds, SiteOption};

// ---------------------------------------------------------------------------
// Process-scoped dashboard context
// ---------------------------------------------------------------------------

/// Everything derived from the dataset at startup. Built once, then shared
/// read-only with every chart handler.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    dataset: LaunchDataset,
    site_options: Vec<SiteOption>,
    site_colors: ColorMap,
    booster_colors: ColorMap,
}

impl DashboardContext {
    /// Load the dataset from `path` and derive the selector inputs.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_dataset(loader::load_file(path)?))
    }

    pub fn from_dataset(dataset: LaunchDataset) -> Self {
        let site_options = dataset.site_options();
        let site_colors = ColorMap::new(dataset.sites().iter().cloned());
        let booster_colors = ColorMap::new(dataset.booster_categories().iter().cloned());
        DashboardContext {
            dataset,
            site_options,
            site_colors,
            booster_colors,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.dataset.bounds()
    }

    pub fn site_options(&self) -> &[SiteOption] {
        &self.site_options
    }

    pub fn site_colors(&self) -> &ColorMap {
        &self.site_colors
    }

    pub fn booster_colors(&self) -> &ColorMap {
        &self.booster_colors
    }
}
