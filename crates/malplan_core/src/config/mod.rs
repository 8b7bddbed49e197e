//! Cost configuration
//!
//! `CostOptions` holds the numeric inputs of the cost model. It is derived
//! from a region's form values with `CostOptions::from_form`, falling back to
//! the published defaults for any field the form leaves blank.
//!
//! # Builder DSL
//!
//! Regions and projects for tests and demos can be assembled fluently:
//!
//! ```ignore
//! use malplan_core::config::RegionBuilder;
//! use malplan_core::model::Scenario;
//!
//! let region = RegionBuilder::new("North")
//!     .population(10_000.0)
//!     .routine_distribution(true)
//!     .cases(Scenario::NoIntervention, [400.0, 380.0, 370.0, 360.0])
//!     .cases(Scenario::IrsOnly, [400.0, 250.0, 240.0, 230.0])
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{FormValue, FormValues, ItnType, POPULATION_KEY};

pub mod builder;

pub use builder::{ProjectBuilder, RegionBuilder};

pub const DEFAULT_POPULATION: f64 = 20_000.0;
pub const DEFAULT_PEOPLE_PER_HOUSEHOLD: f64 = 4.0;
pub const DEFAULT_IRS_COST_PER_HOUSEHOLD: f64 = 20.0;
pub const DEFAULT_LSM_COST_PER_PERSON: f64 = 5.0;
pub const DEFAULT_MASS_DISTRIBUTION_COST_PER_PERSON: f64 = 2.75;
pub const DEFAULT_CONTINUOUS_DISTRIBUTION_COST_PER_PERSON: f64 = 2.75;
pub const DEFAULT_PEOPLE_PER_NET: f64 = 1.8;
pub const DEFAULT_PROCUREMENT_BUFFER_PERCENT: f64 = 0.0;

/// Form field ids read by the cost model
pub mod keys {
    pub const PEOPLE_PER_HOUSEHOLD: &str = "people_per_household";
    pub const IRS_HOUSEHOLD_ANNUAL_COST: &str = "irs_household_annual_cost";
    pub const LSM_COST: &str = "lsm_cost";
    pub const PY_ONLY_COST: &str = "py_only_cost";
    pub const PY_PBO_COST: &str = "py_pbo_cost";
    pub const PY_PYRROLE_COST: &str = "py_pyrrole_cost";
    pub const PY_PPF_COST: &str = "py_ppf_cost";
    pub const MASS_DISTRIBUTION_COST: &str = "mass_distribution_cost";
    pub const CONTINUOUS_DISTRIBUTION_COST: &str = "continuous_itn_distribution_cost";
    pub const PROCUREMENT_BUFFER: &str = "procurement_buffer";
    pub const PEOPLE_PER_BEDNET: &str = "people_per_bednet";
    pub const ROUTINE_COVERAGE: &str = "routine_coverage";

    /// Planned coverage fields, shown alongside impact figures
    pub const ITN_FUTURE: &str = "itn_future";
    pub const IRS_FUTURE: &str = "irs_future";
    pub const LSM_REDUCTION: &str = "lsm";
}

/// Unit price of each bednet product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItnCosts {
    pub py_only: f64,
    pub py_pbo: f64,
    pub py_pyrrole: f64,
    pub py_ppf: f64,
}

impl Default for ItnCosts {
    fn default() -> Self {
        Self {
            py_only: 1.85,
            py_pbo: 2.14,
            py_pyrrole: 2.56,
            py_ppf: 2.86,
        }
    }
}

impl ItnCosts {
    #[must_use]
    pub fn unit_price(&self, itn: ItnType) -> f64 {
        match itn {
            ItnType::PyOnly => self.py_only,
            ItnType::PyPbo => self.py_pbo,
            ItnType::PyPyrrole => self.py_pyrrole,
            ItnType::PyPpf => self.py_ppf,
        }
    }
}

/// Numeric inputs to the cost model for a single region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOptions {
    pub population: f64,
    pub people_per_household: f64,
    pub irs_annual_cost_per_household: f64,
    pub lsm_cost_per_person: f64,
    pub itn_costs: ItnCosts,
    pub mass_distribution_cost_per_person: f64,
    pub continuous_distribution_cost_per_person: f64,
    /// Multiplier applied to net purchases, `1 + buffer% / 100`
    pub procurement_buffer: f64,
    pub people_per_net: f64,
    /// Routine (continuous) distribution between mass campaigns
    pub is_routine: bool,
}

impl Default for CostOptions {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            people_per_household: DEFAULT_PEOPLE_PER_HOUSEHOLD,
            irs_annual_cost_per_household: DEFAULT_IRS_COST_PER_HOUSEHOLD,
            lsm_cost_per_person: DEFAULT_LSM_COST_PER_PERSON,
            itn_costs: ItnCosts::default(),
            mass_distribution_cost_per_person: DEFAULT_MASS_DISTRIBUTION_COST_PER_PERSON,
            continuous_distribution_cost_per_person:
                DEFAULT_CONTINUOUS_DISTRIBUTION_COST_PER_PERSON,
            procurement_buffer: buffer_multiplier(DEFAULT_PROCUREMENT_BUFFER_PERCENT),
            people_per_net: DEFAULT_PEOPLE_PER_NET,
            is_routine: false,
        }
    }
}

/// Convert a procurement buffer percentage into a purchase multiplier
#[must_use]
pub fn buffer_multiplier(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

fn number_or(form: &FormValues, key: &str, default: f64) -> f64 {
    form.get(key)
        .and_then(FormValue::as_number)
        .unwrap_or(default)
}

impl CostOptions {
    /// Read cost options from region form values, using defaults for absent fields
    #[must_use]
    pub fn from_form(form: &FormValues) -> Self {
        let defaults = ItnCosts::default();
        Self {
            population: number_or(form, POPULATION_KEY, DEFAULT_POPULATION),
            people_per_household: number_or(
                form,
                keys::PEOPLE_PER_HOUSEHOLD,
                DEFAULT_PEOPLE_PER_HOUSEHOLD,
            ),
            irs_annual_cost_per_household: number_or(
                form,
                keys::IRS_HOUSEHOLD_ANNUAL_COST,
                DEFAULT_IRS_COST_PER_HOUSEHOLD,
            ),
            lsm_cost_per_person: number_or(form, keys::LSM_COST, DEFAULT_LSM_COST_PER_PERSON),
            itn_costs: ItnCosts {
                py_only: number_or(form, keys::PY_ONLY_COST, defaults.py_only),
                py_pbo: number_or(form, keys::PY_PBO_COST, defaults.py_pbo),
                py_pyrrole: number_or(form, keys::PY_PYRROLE_COST, defaults.py_pyrrole),
                py_ppf: number_or(form, keys::PY_PPF_COST, defaults.py_ppf),
            },
            mass_distribution_cost_per_person: number_or(
                form,
                keys::MASS_DISTRIBUTION_COST,
                DEFAULT_MASS_DISTRIBUTION_COST_PER_PERSON,
            ),
            continuous_distribution_cost_per_person: number_or(
                form,
                keys::CONTINUOUS_DISTRIBUTION_COST,
                DEFAULT_CONTINUOUS_DISTRIBUTION_COST_PER_PERSON,
            ),
            procurement_buffer: buffer_multiplier(number_or(
                form,
                keys::PROCUREMENT_BUFFER,
                DEFAULT_PROCUREMENT_BUFFER_PERCENT,
            )),
            people_per_net: number_or(form, keys::PEOPLE_PER_BEDNET, DEFAULT_PEOPLE_PER_NET),
            is_routine: form
                .get(keys::ROUTINE_COVERAGE)
                .is_some_and(FormValue::is_truthy),
        }
    }
}
