//! Intervention cost model
//!
//! Every cost here covers the full three-year evaluation horizon. The functions
//! are total: degenerate inputs such as a zero household size propagate as
//! `inf`/`NaN` rather than failing.

use crate::config::CostOptions;
use crate::model::{FormValues, ItnType, Scenario};

/// Years covered by every cost and impact figure
pub const EVALUATION_YEARS: f64 = 3.0;

/// Mean time a distributed net stays in use, in days
pub const MEAN_NET_DURATION_DAYS: f64 = 2.1 * 365.0;

/// Net usage maintained by routine distribution
pub const DEFAULT_ROUTINE_USAGE: f64 = 0.15;

/// Routine top-ups happen bi-weekly
pub const TOP_UPS_PER_YEAR: f64 = 26.0;

/// Indoor residual spraying of every household, once a year
#[must_use]
pub fn irs_total_cost(options: &CostOptions) -> f64 {
    EVALUATION_YEARS
        * options.irs_annual_cost_per_household
        * (options.population / options.people_per_household)
}

/// Larval source management for the whole population
#[must_use]
pub fn lsm_total_cost(options: &CostOptions) -> f64 {
    options.lsm_cost_per_person * options.population
}

/// Cost of procuring and delivering enough nets to cover the population once
fn net_distribution_cost(options: &CostOptions, unit_price: f64, delivery_per_person: f64) -> f64 {
    ((delivery_per_person + unit_price) * options.population / options.people_per_net)
        * options.procurement_buffer
}

/// Number of full net distributions routine top-ups add up to over the horizon
///
/// Nets are lost at an exponential rate given their mean duration of use;
/// each bi-weekly top-up replaces what was lost since the previous one.
#[must_use]
pub fn routine_top_ups_over_horizon() -> f64 {
    let incremental_loss = DEFAULT_ROUTINE_USAGE
        * (1.0 - (-(1.0 / TOP_UPS_PER_YEAR) / MEAN_NET_DURATION_DAYS * 365.0).exp());
    let incremental_top_up =
        incremental_loss / (1.0 - DEFAULT_ROUTINE_USAGE - incremental_loss);
    incremental_top_up * TOP_UPS_PER_YEAR * EVALUATION_YEARS
}

/// Mass campaign plus, when enabled, routine continuous distribution
#[must_use]
pub fn itn_total_cost(options: &CostOptions, itn: ItnType) -> f64 {
    let unit_price = options.itn_costs.unit_price(itn);
    let mass = net_distribution_cost(
        options,
        unit_price,
        options.mass_distribution_cost_per_person,
    );
    let continuous = if options.is_routine {
        routine_top_ups_over_horizon()
            * net_distribution_cost(
                options,
                unit_price,
                options.continuous_distribution_cost_per_person,
            )
    } else {
        0.0
    };

    mass + continuous
}

/// Total cost of a scenario's intervention package
#[must_use]
pub fn scenario_cost(scenario: Scenario, options: &CostOptions) -> f64 {
    match scenario {
        Scenario::NoIntervention => 0.0,
        Scenario::IrsOnly => irs_total_cost(options),
        Scenario::LsmOnly => lsm_total_cost(options),
        Scenario::PyOnlyOnly
        | Scenario::PyPboOnly
        | Scenario::PyPyrroleOnly
        | Scenario::PyPpfOnly
        | Scenario::PyOnlyWithLsm
        | Scenario::PyPboWithLsm
        | Scenario::PyPyrroleWithLsm
        | Scenario::PyPpfWithLsm => {
            let itn = scenario
                .itn_type()
                .map_or(0.0, |itn| itn_total_cost(options, itn));
            let lsm = if scenario.includes_lsm() {
                lsm_total_cost(options)
            } else {
                0.0
            };
            itn + lsm
        }
    }
}

/// Costs for the given scenarios from a region's form, in the order given
#[must_use]
pub fn total_costs_per_scenario(
    scenarios: impl IntoIterator<Item = Scenario>,
    form: &FormValues,
) -> Vec<(Scenario, f64)> {
    let options = CostOptions::from_form(form);
    scenarios
        .into_iter()
        .map(|scenario| (scenario, scenario_cost(scenario, &options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItnCosts;
    use crate::model::{FormValue, POPULATION_KEY};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn options() -> CostOptions {
        CostOptions {
            population: 1_000.0,
            people_per_household: 5.0,
            irs_annual_cost_per_household: 10.0,
            lsm_cost_per_person: 2.0,
            itn_costs: ItnCosts {
                py_only: 2.0,
                py_pbo: 3.0,
                py_pyrrole: 4.0,
                py_ppf: 5.0,
            },
            mass_distribution_cost_per_person: 1.0,
            continuous_distribution_cost_per_person: 0.5,
            procurement_buffer: 1.1,
            people_per_net: 2.0,
            is_routine: false,
        }
    }

    #[test]
    fn test_irs_cost() {
        // 3 years * $10 * 200 households
        assert_close(irs_total_cost(&options()), 6_000.0);
    }

    #[test]
    fn test_lsm_cost() {
        assert_close(lsm_total_cost(&options()), 2_000.0);
    }

    #[test]
    fn test_itn_mass_distribution_cost() {
        // (1 + 2) * 1000 / 2 * 1.1
        assert_close(itn_total_cost(&options(), ItnType::PyOnly), 1_650.0);
        // (1 + 5) * 1000 / 2 * 1.1
        assert_close(itn_total_cost(&options(), ItnType::PyPpf), 3_300.0);
    }

    #[test]
    fn test_routine_top_ups_constant() {
        assert!((routine_top_ups_over_horizon() - 0.250_608_865).abs() < 1e-8);
    }

    #[test]
    fn test_itn_cost_with_routine_distribution() {
        let routine = CostOptions {
            is_routine: true,
            ..options()
        };
        // continuous: (0.5 + 2) * 1000 / 2 * 1.1 = 1375 per full distribution
        let expected = 1_650.0 + routine_top_ups_over_horizon() * 1_375.0;
        assert_close(itn_total_cost(&routine, ItnType::PyOnly), expected);
    }

    #[test]
    fn test_default_routine_cost() {
        let routine = CostOptions {
            is_routine: true,
            ..CostOptions::default()
        };
        let mass = 4.6 * 20_000.0 / 1.8;
        let continuous = 12_808.897_567_384_76;
        assert!((itn_total_cost(&routine, ItnType::PyOnly) - (mass + continuous)).abs() < 1e-4);
    }

    #[test]
    fn test_combined_scenarios_add_lsm() {
        let options = options();
        for itn in ItnType::ALL {
            let only = Scenario::ALL
                .into_iter()
                .find(|s| s.itn_type() == Some(itn) && !s.includes_lsm())
                .unwrap();
            let with_lsm = Scenario::ALL
                .into_iter()
                .find(|s| s.itn_type() == Some(itn) && s.includes_lsm())
                .unwrap();
            assert_close(
                scenario_cost(with_lsm, &options),
                scenario_cost(only, &options) + lsm_total_cost(&options),
            );
        }
    }

    #[test]
    fn test_no_intervention_is_free() {
        assert_eq!(scenario_cost(Scenario::NoIntervention, &options()), 0.0);
    }

    #[test]
    fn test_zero_population_yields_zero_not_error() {
        let options = CostOptions {
            population: 0.0,
            ..options()
        };
        for scenario in Scenario::ALL {
            assert_eq!(scenario_cost(scenario, &options), 0.0);
        }
    }

    #[test]
    fn test_zero_household_size_is_non_finite() {
        let options = CostOptions {
            people_per_household: 0.0,
            ..options()
        };
        assert!(irs_total_cost(&options).is_infinite());
    }

    #[test]
    fn test_total_costs_per_scenario_reads_form() {
        let form = FormValues::from([(POPULATION_KEY.to_string(), FormValue::Number(4_000.0))]);
        let costs = total_costs_per_scenario([Scenario::LsmOnly, Scenario::IrsOnly], &form);

        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].0, Scenario::LsmOnly);
        assert_close(costs[0].1, 20_000.0);
        // 3 * 20 * (4000 / 4)
        assert_close(costs[1].1, 60_000.0);
    }
}
