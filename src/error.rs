use thiserror::Error;

/// Errors raised inside the simulation pipeline.
///
/// Most of these never reach the caller of [`crate::synthesize`] or
/// [`crate::compose`]; those functions swap in degraded values instead.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid range for {name}: {low}..={high}")]
    InvalidRange { name: &'static str, low: f64, high: f64 },

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Computation degraded: {0}")]
    Degraded(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
