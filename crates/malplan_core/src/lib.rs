//! Malaria intervention planning core
//!
//! This crate turns per-region form inputs and simulated case time series into
//! costed intervention options, and sweeps a shared per-region spending
//! ceiling to build a cost-vs-cases-averted curve across regions.
//! It supports:
//! - A closed set of 11 intervention scenarios (IRS, LSM, four bednet types alone or with LSM)
//! - A three-year cost model including routine bednet top-ups
//! - Cases averted against the no-intervention baseline, with noise rejection
//! - A budget-sweep strategise engine and closest-point lookup
//! - Per-person and per-case metrics for a chosen strategy
//!
//! Everything here is pure: no I/O, no shared state. Hosts own persistence,
//! scheduling and display.
//!
//! ```ignore
//! use malplan_core::interventions::extract_regions;
//! use malplan_core::model::map_regions_to_population;
//! use malplan_core::strategise::{StrategiseOptions, find_closest, strategise};
//! use malplan_core::strategy::construct_regional_metrics;
//!
//! let regions = extract_regions(&project.regions);
//! let bounds = StrategiseOptions::for_regions(&regions, project.budget)?.validate()?;
//! let results = strategise(&regions, &bounds);
//! if let Some(point) = find_closest(&results, 250_000.0) {
//!     let strategy = construct_regional_metrics(point, &map_regions_to_population(&project.regions));
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cases;
pub mod costs;
pub mod error;
pub mod interventions;
pub mod strategise;
pub mod strategy;
pub mod tables;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{CostOptions, ProjectBuilder, RegionBuilder};
pub use error::StrategiseError;
pub use model::{Intervention, Project, Region, Scenario, StrategiseResult};
