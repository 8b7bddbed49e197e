//! Sweep range and threshold generation

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrategiseError};
use crate::model::RegionInterventions;

/// Number of thresholds swept when none is specified
pub const DEFAULT_SWEEP_POINTS: usize = 200;

fn default_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

/// Cheapest single intervention in any region, rounded to the nearest unit
///
/// `inf` when there are no interventions at all.
#[must_use]
pub fn minimum_cost(regions: &[RegionInterventions]) -> f64 {
    regions
        .iter()
        .flat_map(|r| r.interventions.iter().map(|i| i.cost))
        .fold(f64::INFINITY, f64::min)
        .round()
}

/// Sum over regions of each region's most expensive intervention, rounded
///
/// A region with no interventions contributes `-inf`.
#[must_use]
pub fn maximum_cost(regions: &[RegionInterventions]) -> f64 {
    regions
        .iter()
        .map(|r| {
            r.interventions
                .iter()
                .map(|i| i.cost)
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .sum::<f64>()
        .round()
}

/// `count` evenly spaced values from `min` to `max` inclusive
///
/// The first and last values are exactly `min` and `max`. A count of zero or
/// one yields just `[min]`.
#[must_use]
pub fn linear_space(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                max
            } else {
                min + i as f64 * step
            }
        })
        .collect()
}

/// The threshold axis swept by the strategise engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepBounds {
    pub min_threshold: f64,
    pub max_threshold: f64,
    #[serde(default = "default_points")]
    pub points: usize,
}

impl SweepBounds {
    #[must_use]
    pub fn new(min_threshold: f64, max_threshold: f64) -> Self {
        Self {
            min_threshold,
            max_threshold,
            points: DEFAULT_SWEEP_POINTS,
        }
    }

    /// Sweep from the cheapest intervention to every region's most expensive one
    #[must_use]
    pub fn from_regions(regions: &[RegionInterventions]) -> Self {
        Self::new(minimum_cost(regions), maximum_cost(regions))
    }

    #[must_use]
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn thresholds(&self) -> Vec<f64> {
        linear_space(self.min_threshold, self.max_threshold, self.points)
    }
}

/// A planner's request: the feasible cost range and the budget to explore up to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategiseOptions {
    pub min_cost: f64,
    pub max_cost: f64,
    pub budget: f64,
    #[serde(default = "default_points")]
    pub points: usize,
}

impl StrategiseOptions {
    /// Options spanning the regions' cost range, exploring up to `budget`
    /// (the maximum cost when not given)
    pub fn for_regions(regions: &[RegionInterventions], budget: Option<f64>) -> Result<Self> {
        if regions.is_empty() {
            return Err(StrategiseError::NoRegions);
        }
        let min_cost = minimum_cost(regions);
        let max_cost = maximum_cost(regions);
        Ok(Self {
            min_cost,
            max_cost,
            budget: budget.unwrap_or(max_cost),
            points: DEFAULT_SWEEP_POINTS,
        })
    }

    #[must_use]
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Check the request and turn it into the sweep range `min_cost..=budget`
    pub fn validate(&self) -> Result<SweepBounds> {
        for (name, value) in [
            ("minimum cost", self.min_cost),
            ("maximum cost", self.max_cost),
            ("budget", self.budget),
        ] {
            // negated so NaN is rejected too
            if !(value >= 1.0) {
                return Err(StrategiseError::InvalidCost { name, value });
            }
        }
        if self.budget < self.min_cost || self.budget > self.max_cost {
            return Err(StrategiseError::InvalidBudget {
                budget: self.budget,
                min_cost: self.min_cost,
                max_cost: self.max_cost,
            });
        }
        Ok(SweepBounds {
            min_threshold: self.min_cost,
            max_threshold: self.budget,
            points: self.points,
        })
    }
}
