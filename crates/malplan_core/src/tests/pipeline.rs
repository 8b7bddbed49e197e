//! Tests running a project through the full planning pipeline
//!
//! These tests verify:
//! - Regions without usable data are excluded
//! - The default sweep spans the cheapest option to the all-regions maximum
//! - Below the minimum nothing is funded, at the maximum every region gets its best option
//! - Closest-point lookup and regional metrics line up with the sweep

use crate::config::{ProjectBuilder, RegionBuilder, keys};
use crate::error::StrategiseError;
use crate::interventions::extract_regions;
use crate::model::{Project, Scenario, map_regions_to_population};
use crate::strategise::{
    DEFAULT_SWEEP_POINTS, StrategiseOptions, find_closest, strategise, strategise_at_thresholds,
};
use crate::strategy::construct_regional_metrics;
use crate::tables::{build_all_strategies_table, build_cost_table};

fn demo_project() -> Project {
    ProjectBuilder::new("Demo")
        .budget(300_000.0)
        .region(
            RegionBuilder::new("North")
                .population(20_000.0)
                .cases(Scenario::NoIntervention, [420.0, 400.0, 390.0, 380.0])
                .cases(Scenario::IrsOnly, [420.0, 300.0, 290.0, 280.0])
                .cases(Scenario::LsmOnly, [420.0, 380.0, 370.0, 360.0])
                .cases(Scenario::PyOnlyOnly, [420.0, 350.0, 340.0, 330.0]),
        )
        .region(
            RegionBuilder::new("South")
                .population(10_000.0)
                .form_value(keys::LSM_COST, 2.0)
                .cases(Scenario::NoIntervention, [300.0, 300.0, 300.0, 300.0])
                .cases(Scenario::LsmOnly, [300.0, 250.0, 250.0, 250.0])
                .cases(Scenario::PyPboWithLsm, [300.0, 200.0, 200.0, 200.0]),
        )
        .region(RegionBuilder::new("Unsimulated").population(5_000.0))
        .build()
}

#[test]
fn test_unsimulated_region_is_excluded() {
    let regions = extract_regions(&demo_project().regions);
    let names: Vec<_> = regions.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(names, vec!["North", "South"]);
}

#[test]
fn test_default_sweep_covers_full_range() {
    let project = demo_project();
    let regions = extract_regions(&project.regions);
    let bounds = StrategiseOptions::for_regions(&regions, None)
        .unwrap()
        .validate()
        .unwrap();

    // South LSM: 2 * 10,000
    assert_eq!(bounds.min_threshold, 20_000.0);

    let results = strategise(&regions, &bounds);
    assert_eq!(results.len(), DEFAULT_SWEEP_POINTS);
    assert_eq!(results[0].cost_threshold, bounds.min_threshold);
    assert_eq!(
        results[DEFAULT_SWEEP_POINTS - 1].cost_threshold,
        bounds.max_threshold
    );

    // At the cheapest threshold only South's LSM is affordable
    let first = &results[0];
    assert_eq!(first.selection("North").unwrap().scenario, Scenario::NoIntervention);
    assert_eq!(first.selection("South").unwrap().scenario, Scenario::LsmOnly);
}

#[test]
fn test_maximum_threshold_funds_best_option_everywhere() {
    let regions = extract_regions(&demo_project().regions);
    let options = StrategiseOptions::for_regions(&regions, None).unwrap();
    let results = strategise_at_thresholds(&regions, &[options.max_cost]);

    for region in &regions {
        let best = region
            .interventions
            .iter()
            .map(|i| i.cases_averted)
            .fold(0.0, f64::max);
        let chosen = results[0].selection(&region.region).unwrap();
        assert_eq!(chosen.cases_averted, best, "region {}", region.region);
    }
    assert_eq!(
        results[0].selection("North").unwrap().scenario,
        Scenario::IrsOnly
    );
    assert_eq!(
        results[0].selection("South").unwrap().scenario,
        Scenario::PyPboWithLsm
    );
}

#[test]
fn test_below_minimum_funds_nothing() {
    let regions = extract_regions(&demo_project().regions);
    let results = strategise_at_thresholds(&regions, &[1.0]);
    assert!(
        results[0]
            .interventions
            .iter()
            .all(|i| i.scenario == Scenario::NoIntervention && i.cost == 0.0)
    );
    assert_eq!(results[0].total_cases_averted(), 0.0);
}

#[test]
fn test_budget_caps_sweep() {
    let project = demo_project();
    let regions = extract_regions(&project.regions);
    let bounds = StrategiseOptions::for_regions(&regions, project.budget)
        .unwrap()
        .with_points(50)
        .validate()
        .unwrap();

    let results = strategise(&regions, &bounds);
    assert_eq!(results.len(), 50);
    assert_eq!(results[49].cost_threshold, 300_000.0);
    assert!(results.iter().all(|r| r.cost_threshold <= 300_000.0));
}

#[test]
fn test_budget_above_maximum_is_rejected() {
    let regions = extract_regions(&demo_project().regions);
    let result = StrategiseOptions::for_regions(&regions, Some(1e12))
        .unwrap()
        .validate();
    assert!(matches!(result, Err(StrategiseError::InvalidBudget { .. })));
}

#[test]
fn test_closest_point_and_metrics() {
    let project = demo_project();
    let regions = extract_regions(&project.regions);
    let bounds = StrategiseOptions::for_regions(&regions, None)
        .unwrap()
        .validate()
        .unwrap();
    let results = strategise(&regions, &bounds);

    let point = find_closest(&results, 150_000.0).unwrap();
    assert!(point.cost_threshold >= 150_000.0);
    assert!(point.total_cost() <= point.cost_threshold * regions.len() as f64);

    // past the end falls back to the last point
    let last = find_closest(&results, f64::MAX).unwrap();
    assert_eq!(last.cost_threshold, bounds.max_threshold);

    let strategy = construct_regional_metrics(last, &map_regions_to_population(&project.regions));
    assert_eq!(strategy.regions.len(), 2);
    let north = strategy.region("North").unwrap();
    assert_eq!(north.population, 20_000.0);
    assert!((north.cost_per_person - north.cost / 20_000.0).abs() < 1e-12);
    assert_eq!(strategy.total_cost, last.total_cost());
}

#[test]
fn test_tables_follow_sweep() {
    let project = demo_project();
    let regions = extract_regions(&project.regions);
    let bounds = StrategiseOptions::for_regions(&regions, None)
        .unwrap()
        .with_points(10)
        .validate()
        .unwrap();
    let results = strategise(&regions, &bounds);

    let overall = build_all_strategies_table(&results, None);
    assert_eq!(overall.len(), 10);
    assert_eq!(overall[9].percentage_of_budget, 1.0);

    let north = build_all_strategies_table(&results, Some("North"));
    assert_eq!(north.len(), 10);
    assert_eq!(north[9].scenario, Some(Scenario::IrsOnly));

    let costs = build_cost_table(&regions[0]);
    assert_eq!(costs.len(), regions[0].interventions.len());
}
