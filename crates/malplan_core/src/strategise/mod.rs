//! Budget-sweep strategise engine
//!
//! Approximates the cost-vs-impact trade-off across regions by sweeping a
//! single per-region spending ceiling. At each threshold every region picks,
//! independently, the affordable intervention that averts the most cases.
//! This is not a joint allocation of a global budget.
//!
//! # Example
//!
//! ```ignore
//! use malplan_core::interventions::extract_regions;
//! use malplan_core::strategise::{SweepBounds, find_closest, strategise};
//!
//! let regions = extract_regions(&project.regions);
//! let bounds = SweepBounds::from_regions(&regions);
//! let results = strategise(&regions, &bounds);
//!
//! // The point a user clicked on the curve
//! let chosen = find_closest(&results, 125_000.0);
//! ```

mod bounds;
mod lookup;
mod sweep;

pub use bounds::{
    DEFAULT_SWEEP_POINTS, StrategiseOptions, SweepBounds, linear_space, maximum_cost,
    minimum_cost,
};
pub use lookup::find_closest;
pub use sweep::{
    SweepProgress, select_intervention, strategise, strategise_at_thresholds,
    strategise_with_progress,
};
