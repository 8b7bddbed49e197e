//! The end-to-end planning run behind the CLI
//!
//! Project -> extracted regions -> validated sweep -> closest strategy -> metrics.

use malplan_core::error::StrategiseError;
use malplan_core::interventions::extract_region;
use malplan_core::model::{Project, RegionInterventions, StrategiseResult, map_regions_to_population};
use malplan_core::strategise::{
    DEFAULT_SWEEP_POINTS, StrategiseOptions, SweepBounds, find_closest,
};
use malplan_core::strategy::{Strategy, construct_regional_metrics};
use malplan_core::tables::{StrategyTableRow, build_all_strategies_table};
use serde::Serialize;
use thiserror::Error;

use crate::worker::{SweepOutput, SweepWorker, WorkerError};

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Strategise(#[from] StrategiseError),
    #[error(transparent)]
    Worker(#[from] WorkerError),
    #[error("sweep produced no results")]
    EmptySweep,
}

/// Knobs for a planning run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    pub points: usize,
    /// Overrides the project's budget
    pub budget: Option<f64>,
    /// Threshold to pick the strategy at; defaults to the top of the sweep
    pub select: Option<f64>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            points: DEFAULT_SWEEP_POINTS,
            budget: None,
            select: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub project: String,
    pub bounds: SweepBounds,
    /// Regions left out for lack of simulated cases
    pub excluded_regions: Vec<String>,
    pub strategy: Strategy,
    /// Totals at every swept threshold
    pub curve: Vec<StrategyTableRow>,
    #[serde(skip)]
    pub results: Vec<StrategiseResult>,
}

/// Extract every region's candidate interventions, returning the names of the
/// regions that had to be left out
pub fn extract_project(project: &Project) -> (Vec<RegionInterventions>, Vec<String>) {
    let mut extracted = Vec::with_capacity(project.regions.len());
    let mut excluded = Vec::new();

    for region in &project.regions {
        match extract_region(region) {
            Some(interventions) => {
                tracing::debug!(
                    region = %region.name,
                    interventions = interventions.interventions.len(),
                    "Extracted region"
                );
                extracted.push(interventions);
            }
            None => {
                tracing::warn!(region = %region.name, "No usable case data, excluding region from sweep");
                excluded.push(region.name.clone());
            }
        }
    }

    (extracted, excluded)
}

/// Run the full planning pipeline for `project` on `worker`
pub fn build_plan(
    project: &Project,
    options: &PlanOptions,
    worker: &SweepWorker,
) -> Result<Plan, PlanError> {
    let (regions, excluded_regions) = extract_project(project);

    let sweep_options =
        StrategiseOptions::for_regions(&regions, options.budget.or(project.budget))?
            .with_points(options.points);

    let SweepOutput { bounds, results } = worker
        .run(regions, sweep_options)
        .map_err(|e| match e {
            WorkerError::Strategise(e) => PlanError::Strategise(e),
            other => PlanError::Worker(other),
        })?;

    let select = options.select.unwrap_or(bounds.max_threshold);
    let chosen = find_closest(&results, select).ok_or(PlanError::EmptySweep)?;
    tracing::info!(
        select,
        threshold = chosen.cost_threshold,
        total_cost = chosen.total_cost(),
        "Selected strategy"
    );

    let strategy = construct_regional_metrics(chosen, &map_regions_to_population(&project.regions));
    let curve = build_all_strategies_table(&results, None);

    Ok(Plan {
        project: project.name.clone(),
        bounds,
        excluded_regions,
        strategy,
        curve,
        results,
    })
}
