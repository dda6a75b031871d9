use std::collections::BTreeMap;

use super::{PieChart, PieSlice};
use crate::app::DashboardContext;
use crate::data::filter::{SiteSelection, records_for_site};
use crate::data::model::Outcome;

pub const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

const SUCCESS_COLOR: &str = "#2ca02c";
const FAILURE_COLOR: &str = "#d62728";

/// Pie chart summarising launch outcomes for the selected site.
///
/// * `All` – one slice per launch site (ascending), sized by its number of
///   successful launches. Sites without a success keep a zero slice.
/// * a site – Success / Failure counts for that site, larger count first.
///   An outcome that never occurs gets no slice, and an unknown site yields
///   a chart with no slices at all.
pub fn outcome_summary(ctx: &DashboardContext, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => successes_by_site(ctx),
        SiteSelection::Site(name) => outcomes_for_site(ctx, site, name),
    }
}

fn successes_by_site(ctx: &DashboardContext) -> PieChart {
    let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
    for r in ctx.dataset().records() {
        *sums.entry(r.launch_site.as_str()).or_default() += u64::from(r.class());
    }

    let slices = sums
        .into_iter()
        .map(|(site, successes)| PieSlice {
            label: site.to_string(),
            value: successes,
            color: ctx.site_colors().color_for(site).to_string(),
        })
        .collect();

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        slices,
    }
}

fn outcomes_for_site(ctx: &DashboardContext, site: &SiteSelection, name: &str) -> PieChart {
    let (mut successes, mut failures) = (0u64, 0u64);
    for r in records_for_site(ctx.dataset(), site) {
        match r.outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }

    let mut counts = vec![(Outcome::Success, successes), (Outcome::Failure, failures)];
    // Stable sort keeps Success ahead of Failure on a tie.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let slices = counts
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(outcome, n)| PieSlice {
            label: outcome.label().to_string(),
            value: n,
            color: match outcome {
                Outcome::Success => SUCCESS_COLOR,
                Outcome::Failure => FAILURE_COLOR,
            }
            .to_string(),
        })
        .collect();

    PieChart {
        title: format!("Launch Outcomes for {name}"),
        slices,
    }
}
