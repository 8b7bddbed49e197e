//! Tabular summaries for display
//!
//! Rows are plain data; formatting (currency, placeholders for non-finite
//! values) is left to the host.

use serde::{Deserialize, Serialize};

use crate::cases::{averted_cases, collect_post_intervention_cases, mean_cases_per_1000};
use crate::config::keys;
use crate::model::{
    CasesDatum, FormValue, FormValues, RegionInterventions, Scenario, StrategiseResult,
};

/// Cost-effectiveness of one intervention in a region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTableRow {
    pub scenario: Scenario,
    pub label: &'static str,
    pub cases_averted_total: f64,
    pub total_cost: f64,
    /// `inf` when nothing is averted
    pub cost_per_case_averted: f64,
}

#[must_use]
pub fn build_cost_table(region: &RegionInterventions) -> Vec<CostTableRow> {
    region
        .interventions
        .iter()
        .map(|intervention| CostTableRow {
            scenario: intervention.scenario,
            label: intervention.scenario.label(),
            cases_averted_total: intervention.cases_averted,
            total_cost: intervention.cost,
            cost_per_case_averted: intervention.cost / intervention.cases_averted,
        })
        .collect()
}

/// Modelled impact of one scenario in a region, per 1000 people unless noted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactTableRow {
    pub scenario: Scenario,
    pub label: &'static str,
    /// Planned net use (%), bednet scenarios only
    pub net_use: Option<f64>,
    /// Planned IRS cover (%), IRS scenario only
    pub irs_cover: Option<f64>,
    /// Mosquito reduction from LSM (%), bednet-with-LSM scenarios only
    pub lsm_reduction: Option<f64>,
    pub cases_averted_mean: f64,
    pub cases_averted_year1: f64,
    pub cases_averted_year2: f64,
    pub cases_averted_year3: f64,
    /// Mean averted as a percentage of the baseline mean; non-finite for a zero baseline
    pub relative_reduction_in_cases: f64,
    pub mean_cases_per_person_per_year: f64,
}

fn planned_coverage(form: &FormValues, key: &str, applies: bool) -> Option<f64> {
    if !applies {
        return None;
    }
    form.get(key)
        .filter(|value| value.is_truthy())
        .and_then(FormValue::as_number)
}

/// Impact rows for every scenario with cases averted, in input order
#[must_use]
pub fn build_impact_table(cases: &[CasesDatum], form: &FormValues) -> Vec<ImpactTableRow> {
    let grouped = collect_post_intervention_cases(cases);
    let baseline_mean = grouped
        .get(&Scenario::NoIntervention)
        .filter(|cases| !cases.is_empty())
        .map_or(0.0, |cases| mean_cases_per_1000(cases));

    averted_cases(&grouped)
        .into_iter()
        .map(|(scenario, averted)| {
            let scenario_mean = grouped
                .get(&scenario)
                .map_or(0.0, |cases| mean_cases_per_1000(cases));
            let is_itn = scenario.itn_type().is_some();
            ImpactTableRow {
                scenario,
                label: scenario.label(),
                net_use: planned_coverage(form, keys::ITN_FUTURE, is_itn),
                irs_cover: planned_coverage(form, keys::IRS_FUTURE, scenario == Scenario::IrsOnly),
                lsm_reduction: planned_coverage(
                    form,
                    keys::LSM_REDUCTION,
                    is_itn && scenario.includes_lsm(),
                ),
                cases_averted_mean: averted.mean,
                cases_averted_year1: averted.year1,
                cases_averted_year2: averted.year2,
                cases_averted_year3: averted.year3,
                relative_reduction_in_cases: averted.mean / baseline_mean * 100.0,
                mean_cases_per_person_per_year: scenario_mean / 1000.0,
            }
        })
        .collect()
}

/// One sweep point, seen from one region or from all of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyTableRow {
    pub cost_threshold: f64,
    /// Threshold as a fraction of the largest threshold swept
    pub percentage_of_budget: f64,
    /// `None` for the all-regions view
    pub scenario: Option<Scenario>,
    pub total_cases_averted: f64,
    pub total_cost: f64,
}

/// Rows for every swept threshold, for `region` or summed across all regions
///
/// With `Some(region)`, thresholds where the region does not appear are skipped.
#[must_use]
pub fn build_all_strategies_table(
    results: &[StrategiseResult],
    region: Option<&str>,
) -> Vec<StrategyTableRow> {
    let max_threshold = results
        .iter()
        .map(|r| r.cost_threshold)
        .fold(f64::NEG_INFINITY, f64::max);

    results
        .iter()
        .filter_map(|result| {
            let percentage_of_budget = result.cost_threshold / max_threshold;
            match region {
                Some(name) => result.selection(name).map(|selection| StrategyTableRow {
                    cost_threshold: result.cost_threshold,
                    percentage_of_budget,
                    scenario: Some(selection.scenario),
                    total_cases_averted: selection.cases_averted,
                    total_cost: selection.cost,
                }),
                None => Some(StrategyTableRow {
                    cost_threshold: result.cost_threshold,
                    percentage_of_budget,
                    scenario: None,
                    total_cases_averted: result.total_cases_averted(),
                    total_cost: result.total_cost(),
                }),
            }
        })
        .collect()
}
