mod common;

use common::{Fixture, RECORDS, SITES};
use launch_dash::charts::{outcome_summary, payload_outcome};
use launch_dash::data::filter::{PayloadRange, SiteSelection};
use launch_dash::data::model::PayloadBounds;

fn all_selections() -> Vec<SiteSelection> {
    std::iter::once(SiteSelection::All)
        .chain(SITES.iter().map(|s| SiteSelection::from(*s)))
        .collect()
}

#[test]
fn loader_derives_bounds_and_options() {
    let ctx = Fixture::new().context();
    assert_eq!(ctx.dataset().len(), RECORDS);
    assert_eq!(ctx.bounds(), PayloadBounds { min: 0.0, max: 9600.0 });

    let values: Vec<&str> = ctx.site_options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["ALL", "CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    assert_eq!(ctx.site_options()[0].label, "All Sites");
}

#[test]
fn all_sites_pie_has_one_slice_per_site_sized_by_successes() {
    let ctx = Fixture::new().context();
    let pie = outcome_summary(&ctx, &SiteSelection::All);

    assert_eq!(pie.title, "Total Successful Launches by Site");
    assert_eq!(pie.labels(), SITES);
    let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();
    assert_eq!(values, [2, 2, 3, 1]);

    let successes = ctx.dataset().records().iter().filter(|r| r.class() == 1).count();
    assert_eq!(pie.total(), successes as u64);
}

#[test]
fn single_site_pie_counts_success_and_failure() {
    let ctx = Fixture::new().context();
    let pie = outcome_summary(&ctx, &SiteSelection::from("CCAFS LC-40"));

    assert_eq!(pie.title, "Launch Outcomes for CCAFS LC-40");
    assert_eq!(pie.labels(), ["Failure", "Success"]);
    let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();
    assert_eq!(values, [6, 2]);
}

#[test]
fn single_site_slices_sum_to_site_records() {
    let ctx = Fixture::new().context();
    for site in SITES {
        let pie = outcome_summary(&ctx, &SiteSelection::from(site));
        let expected = ctx
            .dataset()
            .records()
            .iter()
            .filter(|r| r.launch_site == site)
            .count();
        assert_eq!(pie.total(), expected as u64, "{site}");
        assert!(pie.slices.len() <= 2);
        assert!(pie.labels().iter().all(|l| *l == "Success" || *l == "Failure"));
    }
}

#[test]
fn zero_payload_range_keeps_only_zero_payloads() {
    let ctx = Fixture::new().context();
    let chart = payload_outcome(&ctx, &SiteSelection::All, PayloadRange::new(0.0, 0.0));
    assert_eq!(chart.points.len(), 2);
    assert!(chart.points.iter().all(|p| p.x == 0.0));
}

#[test]
fn full_range_returns_every_record_once() {
    let ctx = Fixture::new().context();
    let b = ctx.bounds();
    let chart = payload_outcome(&ctx, &SiteSelection::All, PayloadRange::new(b.min, b.max));

    assert_eq!(chart.points.len(), RECORDS);
    for (point, record) in chart.points.iter().zip(ctx.dataset().records()) {
        assert_eq!(point.x, record.payload_mass_kg);
        assert_eq!(point.y, record.class());
        assert_eq!(point.category, record.booster_category);
        assert_eq!(point.launch_site, record.launch_site);
    }
}

#[test]
fn scatter_returns_exactly_the_matching_records() {
    let ctx = Fixture::new().context();
    let ranges = [
        (0.0, 10000.0),
        (500.0, 500.0),
        (1000.0, 4000.0),
        (3325.0, 5600.0),
        (9700.0, 10000.0),
    ];
    for site in all_selections() {
        for (low, high) in ranges {
            let range = PayloadRange::new(low, high);
            let chart = payload_outcome(&ctx, &site, range);
            let expected = ctx
                .dataset()
                .records()
                .iter()
                .filter(|r| low <= r.payload_mass_kg && r.payload_mass_kg <= high)
                .filter(|r| site.matches(r))
                .count();
            assert_eq!(chart.points.len(), expected, "{site} [{low}, {high}]");
            assert!(chart.points.iter().all(|p| range.contains(p.x)));
        }
    }
}

#[test]
fn scatter_title_names_the_selection() {
    let ctx = Fixture::new().context();
    let range = PayloadRange::new(0.0, 10000.0);
    assert_eq!(
        payload_outcome(&ctx, &SiteSelection::All, range).title,
        "Payload vs. Outcome for All Sites"
    );
    assert_eq!(
        payload_outcome(&ctx, &SiteSelection::from("KSC LC-39A"), range).title,
        "Payload vs. Outcome for KSC LC-39A"
    );
}

#[test]
fn handlers_are_idempotent() {
    let ctx = Fixture::new().context();
    let range = PayloadRange::new(2000.0, 6000.0);
    for site in all_selections() {
        assert_eq!(outcome_summary(&ctx, &site), outcome_summary(&ctx, &site));
        assert_eq!(
            payload_outcome(&ctx, &site, range),
            payload_outcome(&ctx, &site, range)
        );
    }
}

#[test]
fn empty_results_do_not_error() {
    let ctx = Fixture::new().context();
    let nowhere = SiteSelection::from("Boca Chica");
    assert!(outcome_summary(&ctx, &nowhere).slices.is_empty());
    assert!(payload_outcome(&ctx, &nowhere, PayloadRange::new(0.0, 10000.0))
        .points
        .is_empty());
    assert!(payload_outcome(&ctx, &SiteSelection::All, PayloadRange::new(100.0, 200.0))
        .points
        .is_empty());
}

#[test]
fn malformed_dataset_fails_to_load() {
    let missing_class = Fixture::with_contents(
        "spacex_launch_dash.csv",
        "Launch Site,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,0,v1.0\n",
    );
    assert!(launch_dash::app::DashboardContext::load(&missing_class.path).is_err());

    let bad_class = Fixture::with_contents(
        "spacex_launch_dash.csv",
        "Launch Site,Payload Mass (kg),class,Booster Version Category\nCCAFS LC-40,0,maybe,v1.0\n",
    );
    assert!(launch_dash::app::DashboardContext::load(&bad_class.path).is_err());
}
