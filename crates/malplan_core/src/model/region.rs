//! Region and project context
//!
//! These types stand in for what the hosting application keeps in its
//! per-user session. The core only ever receives them by reference.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::CasesDatum;

/// A single value captured by the region form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Bool(bool),
    List(Vec<String>),
}

impl FormValue {
    /// Numeric reading of the value; booleans read as 0/1, lists have none
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n),
            FormValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FormValue::List(_) => None,
        }
    }

    /// Truthiness: non-zero numbers, `true`, and any list
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            FormValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FormValue::Bool(b) => *b,
            FormValue::List(_) => true,
        }
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(value: Vec<String>) -> Self {
        FormValue::List(value)
    }
}

/// Form values keyed by field id
pub type FormValues = BTreeMap<String, FormValue>;

/// Region name to population
pub type Populations = FxHashMap<String, f64>;

/// Form key holding a region's population
pub const POPULATION_KEY: &str = "population";

/// A region with its form inputs and the simulated case time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub form_values: FormValues,
    #[serde(default)]
    pub cases: Vec<CasesDatum>,
}

impl Region {
    /// Population as entered on the form, if it is numeric
    #[must_use]
    pub fn population(&self) -> Option<f64> {
        self.form_values
            .get(POPULATION_KEY)
            .and_then(FormValue::as_number)
    }
}

/// A planning project: a named budget over a set of regions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Project {
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }
}

/// Map each region to its form population; non-numeric or missing reads as 0
#[must_use]
pub fn map_regions_to_population(regions: &[Region]) -> Populations {
    regions
        .iter()
        .map(|region| (region.name.clone(), region.population().unwrap_or(0.0)))
        .collect()
}
