//! Regional metrics for a chosen strategy
//!
//! Normalises a point on the strategise curve into per-person and per-case
//! figures. Per-person figures are guarded against a zero population; cost
//! per case averted is not, and is `inf` (or `NaN`) when nothing is averted.
//! Display code is expected to render non-finite values as a placeholder.

use serde::{Deserialize, Serialize};

use crate::model::{Populations, Scenario, StrategiseResult};

/// Metrics for one region under the chosen strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalMetrics {
    pub region: String,
    pub scenario: Scenario,
    pub cost: f64,
    pub cases_averted: f64,
    pub population: f64,
    pub cost_per_person: f64,
    pub cases_averted_per_person: f64,
    pub cost_per_case_averted: f64,
}

/// A selected strategy with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub result: StrategiseResult,
    /// One entry per region, in the result's region order
    pub regions: Vec<RegionalMetrics>,
    pub total_cost: f64,
    pub total_cases_averted: f64,
    pub overall_cost_per_case_averted: f64,
}

impl Strategy {
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&RegionalMetrics> {
        self.regions.iter().find(|m| m.region == name)
    }
}

fn per_person(value: f64, population: f64) -> f64 {
    if population == 0.0 {
        0.0
    } else {
        value / population
    }
}

/// Build per-region and overall metrics for `result`
///
/// Regions missing from `populations` are treated as having no population.
#[must_use]
pub fn construct_regional_metrics(result: &StrategiseResult, populations: &Populations) -> Strategy {
    let regions: Vec<RegionalMetrics> = result
        .interventions
        .iter()
        .map(|selection| {
            let population = populations.get(&selection.region).copied().unwrap_or(0.0);
            RegionalMetrics {
                region: selection.region.clone(),
                scenario: selection.scenario,
                cost: selection.cost,
                cases_averted: selection.cases_averted,
                population,
                cost_per_person: per_person(selection.cost, population),
                cases_averted_per_person: per_person(selection.cases_averted, population),
                cost_per_case_averted: selection.cost / selection.cases_averted,
            }
        })
        .collect();

    let total_cost = result.total_cost();
    let total_cases_averted = result.total_cases_averted();

    Strategy {
        result: result.clone(),
        regions,
        total_cost,
        total_cases_averted,
        overall_cost_per_case_averted: total_cost / total_cases_averted,
    }
}
