//! Strategise inputs and outputs

use serde::{Deserialize, Serialize};

use super::Scenario;

/// A candidate intervention for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    pub scenario: Scenario,
    /// Total cost over the three-year horizon
    pub cost: f64,
    /// Absolute number of cases averted over the three-year horizon
    pub cases_averted: f64,
}

impl Intervention {
    /// The implicit option every region has: do nothing, spend nothing
    pub const NONE: Intervention = Intervention {
        scenario: Scenario::NoIntervention,
        cost: 0.0,
        cases_averted: 0.0,
    };
}

/// All candidate interventions for one region, in extraction order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInterventions {
    pub region: String,
    pub interventions: Vec<Intervention>,
}

/// The intervention picked for one region at a given cost threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    pub region: String,
    pub scenario: Scenario,
    pub cost: f64,
    pub cases_averted: f64,
}

/// One point on the strategise curve: a selection for every region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategiseResult {
    pub cost_threshold: f64,
    pub interventions: Vec<RegionSelection>,
}

impl StrategiseResult {
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.interventions.iter().map(|i| i.cost).sum()
    }

    #[must_use]
    pub fn total_cases_averted(&self) -> f64 {
        self.interventions.iter().map(|i| i.cases_averted).sum()
    }

    #[must_use]
    pub fn selection(&self, region: &str) -> Option<&RegionSelection> {
        self.interventions.iter().find(|i| i.region == region)
    }
}
