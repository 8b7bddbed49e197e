use thiserror::Error;

/// Errors raised at the edges of the strategise engine.
///
/// Numeric degeneracy (zero population, nothing averted) is never an error;
/// those cases produce `0` or non-finite values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategiseError {
    #[error("{name} must be at least 1 (got {value})")]
    InvalidCost { name: &'static str, value: f64 },

    #[error("budget {budget} must be between minimum cost {min_cost} and maximum cost {max_cost}")]
    InvalidBudget {
        budget: f64,
        min_cost: f64,
        max_cost: f64,
    },

    #[error("no regions have cases averted data to strategise over")]
    NoRegions,

    /// Sweep was cancelled through its progress handle
    #[error("strategise sweep cancelled")]
    Cancelled,

    #[error("unknown scenario {0:?}")]
    UnknownScenario(String),
}

pub type Result<T> = std::result::Result<T, StrategiseError>;
