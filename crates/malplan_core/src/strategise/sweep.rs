//! Threshold sweep
//!
//! With the `parallel` feature thresholds are evaluated with rayon. Results
//! are collected in threshold order, so the output is identical either way.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, StrategiseError};
use crate::model::{Intervention, RegionInterventions, RegionSelection, StrategiseResult};

use super::SweepBounds;

/// Progress tracking for a strategise sweep
#[derive(Debug, Clone)]
pub struct SweepProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl SweepProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(total)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share counters owned by a host, e.g. a background worker
    #[must_use]
    pub fn from_atomics(
        completed: Arc<AtomicUsize>,
        total: Arc<AtomicUsize>,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            completed,
            total,
            cancelled,
        }
    }

    /// Thresholds evaluated so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Default for SweepProgress {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Best affordable option for one region at `threshold`
///
/// Candidates are the implicit `no_intervention` followed by `interventions`
/// in order. Among those costing at most `threshold`, the one averting the
/// most cases wins; on a tie the earlier candidate is kept.
#[must_use]
pub fn select_intervention(interventions: &[Intervention], threshold: f64) -> Intervention {
    interventions
        .iter()
        .filter(|candidate| candidate.cost <= threshold)
        .fold(Intervention::NONE, |best, candidate| {
            if candidate.cases_averted > best.cases_averted {
                *candidate
            } else {
                best
            }
        })
}

fn strategise_at(regions: &[RegionInterventions], threshold: f64) -> StrategiseResult {
    let interventions = regions
        .iter()
        .map(|region| {
            let chosen = select_intervention(&region.interventions, threshold);
            RegionSelection {
                region: region.region.clone(),
                scenario: chosen.scenario,
                cost: chosen.cost,
                cases_averted: chosen.cases_averted,
            }
        })
        .collect();

    StrategiseResult {
        cost_threshold: threshold,
        interventions,
    }
}

/// Evaluate the given thresholds in order
#[must_use]
pub fn strategise_at_thresholds(
    regions: &[RegionInterventions],
    thresholds: &[f64],
) -> Vec<StrategiseResult> {
    #[cfg(feature = "parallel")]
    let results = thresholds
        .par_iter()
        .map(|&threshold| strategise_at(regions, threshold))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = thresholds
        .iter()
        .map(|&threshold| strategise_at(regions, threshold))
        .collect();

    results
}

/// Sweep `bounds` and pick every region's best affordable intervention at each threshold
#[must_use]
pub fn strategise(regions: &[RegionInterventions], bounds: &SweepBounds) -> Vec<StrategiseResult> {
    strategise_at_thresholds(regions, &bounds.thresholds())
}

/// Same sweep as [`strategise`], reporting into `progress` and stopping if it is cancelled
pub fn strategise_with_progress(
    regions: &[RegionInterventions],
    bounds: &SweepBounds,
    progress: &SweepProgress,
) -> Result<Vec<StrategiseResult>> {
    let thresholds = bounds.thresholds();
    progress.reset(thresholds.len());

    let evaluate = |&threshold: &f64| {
        if progress.is_cancelled() {
            return None;
        }
        let result = strategise_at(regions, threshold);
        progress.increment();
        Some(result)
    };

    #[cfg(feature = "parallel")]
    let results: Option<Vec<StrategiseResult>> = thresholds.par_iter().map(evaluate).collect();

    #[cfg(not(feature = "parallel"))]
    let results: Option<Vec<StrategiseResult>> = thresholds.iter().map(evaluate).collect();

    results.ok_or(StrategiseError::Cancelled)
}
