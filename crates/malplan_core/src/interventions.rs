//! Region intervention extractor
//!
//! Combines the cost model and the cases-averted calculator into the list of
//! candidate interventions the strategise engine sweeps over.

use crate::cases::{averted_cases_for, per_1000_to_total};
use crate::config::{CostOptions, DEFAULT_POPULATION};
use crate::costs::scenario_cost;
use crate::model::{Intervention, Region, RegionInterventions};

/// Population used to scale per-1000 figures; blank or zero falls back to the default
fn extraction_population(region: &Region) -> f64 {
    region
        .population()
        .filter(|p| *p != 0.0 && !p.is_nan())
        .unwrap_or(DEFAULT_POPULATION)
}

/// Candidate interventions for one region
///
/// Returns `None` when the region has no usable cases-averted data, e.g. no
/// `no_intervention` baseline or no post-intervention observations.
#[must_use]
pub fn extract_region(region: &Region) -> Option<RegionInterventions> {
    let averted = averted_cases_for(&region.cases);
    if averted.is_empty() {
        return None;
    }

    let options = CostOptions::from_form(&region.form_values);
    let population = extraction_population(region);

    let interventions = averted
        .into_iter()
        .map(|(scenario, averted)| Intervention {
            scenario,
            cost: scenario_cost(scenario, &options),
            cases_averted: per_1000_to_total(averted.total, population),
        })
        .collect();

    Some(RegionInterventions {
        region: region.name.clone(),
        interventions,
    })
}

/// Candidate interventions for every region with usable data, in input order
#[must_use]
pub fn extract_regions(regions: &[Region]) -> Vec<RegionInterventions> {
    regions.iter().filter_map(extract_region).collect()
}
