use serde::{Deserialize, Serialize};

use super::Scenario;

/// The year before any new intervention is introduced
pub const PRE_INTERVENTION_YEAR: u8 = 1;

/// Years observed after interventions start
pub const POST_INTERVENTION_YEARS: [u8; 3] = [2, 3, 4];

/// One simulated observation of clinical cases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasesDatum {
    pub scenario: Scenario,
    /// 1 is the pre-intervention baseline, 2-4 are post-intervention
    pub year: u8,
    pub cases_per_1000: f64,
}

impl CasesDatum {
    #[must_use]
    pub fn new(scenario: Scenario, year: u8, cases_per_1000: f64) -> Self {
        Self {
            scenario,
            year,
            cases_per_1000,
        }
    }

    #[must_use]
    pub fn is_post_intervention(&self) -> bool {
        self.year > PRE_INTERVENTION_YEAR
    }
}

/// Cases averted relative to the no-intervention baseline, per 1000 people
///
/// `year1..year3` are the three post-intervention years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CasesAverted {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
    pub mean: f64,
    /// `year1 + year2 + year3`
    pub total: f64,
}

impl CasesAverted {
    /// All-zero value reported when the averted effect is indistinguishable from noise
    pub const ZERO: CasesAverted = CasesAverted {
        year1: 0.0,
        year2: 0.0,
        year3: 0.0,
        mean: 0.0,
        total: 0.0,
    };
}
