//! Integration tests for the malplan planning pipeline
//!
//! Tests are organized by topic:
//! - `pipeline` - Project inputs through extraction, sweep and metrics
//! - `sweep_properties` - Properties of the sweep over randomised regions
//! - `noise` - Rejection of negligible simulated improvements

mod pipeline;
