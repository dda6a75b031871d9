use super::{LegendEntry, ScatterChart, ScatterPoint};
use crate::app::DashboardContext;
use crate::data::filter::{PayloadRange, SiteSelection, records_in_range};
use crate::data::model::{COL_CLASS, COL_PAYLOAD_MASS};

/// Scatter of payload mass against outcome class for launches whose payload
/// lies in `range` (inclusive) and, unless `All` is selected, that flew from
/// the selected site. One point per matching record, in dataset order.
pub fn payload_outcome(
    ctx: &DashboardContext,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut points = Vec::new();
    let mut legend: Vec<LegendEntry> = Vec::new();

    for r in records_in_range(ctx.dataset(), site, range) {
        if !legend.iter().any(|e| e.category == r.booster_category) {
            legend.push(LegendEntry {
                category: r.booster_category.clone(),
                color: ctx.booster_colors().color_for(&r.booster_category).to_string(),
            });
        }
        points.push(ScatterPoint {
            x: r.payload_mass_kg,
            y: r.class(),
            category: r.booster_category.clone(),
            launch_site: r.launch_site.clone(),
        });
    }

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {name}"),
    };

    ScatterChart {
        title,
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        points,
        legend,
    }
}
