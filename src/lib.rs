//! # quantum-hybrid-orchestrator
//!
//! A decision engine that routes a mean-variance portfolio allocation problem
//! to a classical, quantum, or hybrid execution path based on estimated
//! resource cost and solution-quality tradeoffs.
//!
//! ## Architecture
//!
//! Two independent dependency leaves feed a threshold-based router:
//! ```text
//! ProblemInstance → { classical baseline solve, quantum resource estimate }
//!                 → Orchestrator + ThresholdPolicy → Decision
//! ```
//!
//! Both leaves carry "never fail observably" contracts: the classical solver
//! substitutes a uniform allocation on any numerical failure, and the quantum
//! estimator degrades to a closed-form fallback formula whenever the external
//! synthesis backend is absent, errors, or times out.

// ── Lint policy (aerospace-grade) ─────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod classical;
pub mod estimator;
pub mod ledger;
pub mod quantum;
pub mod routing;
pub mod synthesis;

// Re-exports for convenience
pub use classical::{solve_baseline, ClassicalResult};
pub use estimator::{HardwareProfile, ResourceEstimator, ResourceFigures};
pub use ledger::{DecisionLog, DecisionRecord};
pub use quantum::{fallback_estimate, EstimateSource, QuantumEstimate, QuantumEstimator};
pub use routing::{Decision, DecisionTracker, ExecutionPath, Orchestrator, ThresholdPolicy};
pub use synthesis::{
    CircuitModel, StaticBackend, SynthesisBackend, SynthesisConfig, SynthesisError,
    SynthesisOutcome, SynthesisPreferences, UnavailableBackend,
};

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` — structured JSON output for production log aggregators
/// - anything else (including unset) — human-readable pretty output
///   for local development
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
///
/// # Errors
///
/// Returns [`OrchestratorError::Other`] if the global subscriber has already
/// been set (e.g. by a previous call or a test harness).
///
/// # Panics
///
/// This function never panics.
pub fn init_tracing() -> Result<(), OrchestratorError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_current_span(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(),
    };

    result.map_err(|e| OrchestratorError::Other(format!("tracing init failed: {e}")))
}

/// Top-level orchestrator errors.
///
/// The decision core itself never fails as a consequence of its leaves'
/// internal conditions; the variants here cover the surfaces that *are*
/// allowed to fail — configuration loading and the decision ledger.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// A configuration value is missing or invalid.
    ///
    /// Returned at construction time so that misconfiguration surfaces
    /// immediately rather than at the first decision call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Appending to the decision ledger failed at the I/O layer.
    #[error("ledger write failed for {file}: {source}")]
    Ledger {
        /// Path of the ledger file that could not be written.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A decision record could not be serialised to JSON.
    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}

/// A mean-variance portfolio allocation problem instance.
///
/// Immutable input to both solve paths; owned by the caller and read-only to
/// the core. The dimension invariant `mu.len() == sigma.len() ==
/// sigma[i].len()` is a caller obligation — a violation is treated by the
/// classical solver as a numerical failure (uniform fallback), never a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    /// Expected returns per asset, length `n`.
    pub mu: Vec<f64>,
    /// `n × n` covariance matrix, row-major. Symmetric positive-semidefinite
    /// by convention but not validated.
    pub sigma: Vec<Vec<f64>>,
    /// Tikhonov regularization weight, `>= 0`.
    pub risk_lambda: f64,
    /// Total allocation budget the weights are scaled to.
    pub budget: f64,
}

impl ProblemInstance {
    /// Create a problem with default regularization (`1.0`) and budget (`1.0`).
    pub fn new(mu: Vec<f64>, sigma: Vec<Vec<f64>>) -> Self {
        Self {
            mu,
            sigma,
            risk_lambda: 1.0,
            budget: 1.0,
        }
    }

    /// Set the regularization weight.
    pub fn with_risk_lambda(mut self, risk_lambda: f64) -> Self {
        self.risk_lambda = risk_lambda;
        self
    }

    /// Set the allocation budget.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Number of assets in this problem.
    pub fn num_assets(&self) -> usize {
        self.mu.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect()
    }

    #[test]
    fn test_problem_instance_defaults() {
        let p = ProblemInstance::new(vec![0.1, 0.2], identity(2));
        assert!((p.risk_lambda - 1.0).abs() < f64::EPSILON);
        assert!((p.budget - 1.0).abs() < f64::EPSILON);
        assert_eq!(p.num_assets(), 2);
    }

    #[test]
    fn test_problem_instance_builders() {
        let p = ProblemInstance::new(vec![0.1], identity(1))
            .with_risk_lambda(0.5)
            .with_budget(2.0);
        assert!((p.risk_lambda - 0.5).abs() < f64::EPSILON);
        assert!((p.budget - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_error_display_includes_message() {
        let err = OrchestratorError::Config("ROUTER_MIN_FIDELITY not a number".to_string());
        assert!(err.to_string().contains("ROUTER_MIN_FIDELITY"));
    }

    #[test]
    fn test_init_tracing_second_call_returns_err() {
        // First call may succeed or fail depending on test execution order
        // (another test may have already installed a subscriber).
        let _ = init_tracing();
        // Second call must not panic — it should return Err.
        let result = init_tracing();
        assert!(result.is_err(), "double init must return Err, not panic");
    }
}
