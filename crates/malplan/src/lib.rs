//! Command-line host for the malplan planning engine
//!
//! Loads project files, runs the budget sweep on a background worker and
//! renders the chosen strategy.

pub mod format;
pub mod logging;
pub mod plan;
pub mod project_file;
pub mod report;
pub mod worker;

pub use logging::init_logging;
pub use plan::{Plan, PlanError, PlanOptions, build_plan};
pub use project_file::{ProjectFileError, load_project};
pub use worker::{SweepHandle, SweepOutput, SweepWorker, spawn_strategise};
