//! Cases-averted calculator
//!
//! Turns a region's raw per-scenario case time series into the reduction in
//! clinical cases each scenario achieves against the no-intervention baseline
//! over the three post-intervention years.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::CostOptions;
use crate::costs::scenario_cost;
use crate::model::{CasesAverted, CasesDatum, FormValues, POST_INTERVENTION_YEARS, Scenario};

/// Post-intervention observations grouped by scenario, in first-seen order
pub type PostInterventionCases = IndexMap<Scenario, Vec<CasesDatum>>;

/// Per-scenario output, in the same first-seen order as its input
pub type ScenarioMap<T> = IndexMap<Scenario, T>;

/// Decimal places the mean averted value is rounded to before the noise check
const NOISE_ROUNDING_PLACES: i32 = 1;

/// Round half away from zero to `places` decimal places
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[must_use]
pub fn per_1000_to_total(per_1000: f64, population: f64) -> f64 {
    (per_1000 / 1000.0) * population
}

#[must_use]
pub fn total_to_per_1000(total: f64, population: f64) -> f64 {
    (total / population) * 1000.0
}

/// Sum of cases per 1000 across the given observations
#[must_use]
pub fn total_cases_per_1000(cases: &[CasesDatum]) -> f64 {
    cases.iter().map(|c| c.cases_per_1000).sum()
}

/// Arithmetic mean of cases per 1000; `NaN` for no observations
#[must_use]
pub fn mean_cases_per_1000(cases: &[CasesDatum]) -> f64 {
    total_cases_per_1000(cases) / cases.len() as f64
}

/// Drop the pre-intervention year and group the rest by scenario
#[must_use]
pub fn collect_post_intervention_cases(cases: &[CasesDatum]) -> PostInterventionCases {
    let mut grouped = PostInterventionCases::new();
    for datum in cases.iter().filter(|c| c.is_post_intervention()) {
        grouped.entry(datum.scenario).or_default().push(*datum);
    }
    grouped
}

fn cases_for_year(cases: &[CasesDatum], year: u8) -> f64 {
    cases
        .iter()
        .rev()
        .find(|c| c.year == year)
        .map_or(0.0, |c| c.cases_per_1000)
}

/// Cases averted for every scenario that has post-intervention data
///
/// Returns an empty map when there is no `no_intervention` baseline. A
/// scenario whose mean averted value rounds to `<= 0.0` at one decimal place
/// is treated as simulation noise and reported as all zeros.
#[must_use]
pub fn averted_cases(post_intervention: &PostInterventionCases) -> ScenarioMap<CasesAverted> {
    let Some(baseline) = post_intervention
        .get(&Scenario::NoIntervention)
        .filter(|cases| !cases.is_empty())
    else {
        return ScenarioMap::new();
    };

    let baseline_by_year = POST_INTERVENTION_YEARS.map(|year| cases_for_year(baseline, year));
    let baseline_mean = mean_cases_per_1000(baseline);

    post_intervention
        .iter()
        .filter(|(scenario, cases)| **scenario != Scenario::NoIntervention && !cases.is_empty())
        .map(|(scenario, cases)| {
            let scenario_by_year = POST_INTERVENTION_YEARS.map(|year| cases_for_year(cases, year));
            let [year1, year2, year3]: [f64; 3] =
                std::array::from_fn(|i| baseline_by_year[i] - scenario_by_year[i]);
            let mean = baseline_mean - mean_cases_per_1000(cases);

            let averted = if round_to(mean, NOISE_ROUNDING_PLACES) > 0.0 {
                CasesAverted {
                    year1,
                    year2,
                    year3,
                    mean,
                    total: year1 + year2 + year3,
                }
            } else {
                CasesAverted::ZERO
            };
            (*scenario, averted)
        })
        .collect()
}

/// Convenience: group `cases` and compute cases averted in one step
#[must_use]
pub fn averted_cases_for(cases: &[CasesDatum]) -> ScenarioMap<CasesAverted> {
    averted_cases(&collect_post_intervention_cases(cases))
}

/// Absolute cost and post-intervention case burden of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTotals {
    pub total_cost: f64,
    /// Absolute clinical cases over the post-intervention years
    pub total_cases: f64,
}

/// Cost and absolute case totals for each scenario that has post-intervention data
#[must_use]
pub fn total_cases_and_costs_per_scenario(
    cases: &[CasesDatum],
    form: &FormValues,
) -> ScenarioMap<ScenarioTotals> {
    let options = CostOptions::from_form(form);
    collect_post_intervention_cases(cases)
        .iter()
        .map(|(scenario, cases)| {
            let totals = ScenarioTotals {
                total_cost: scenario_cost(*scenario, &options),
                total_cases: per_1000_to_total(total_cases_per_1000(cases), options.population),
            };
            (*scenario, totals)
        })
        .collect()
}
