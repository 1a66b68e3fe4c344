//! Routing threshold configuration.
//!
//! Provides [`ThresholdPolicy`] for tuning the fidelity, cost, and qubit
//! bounds the orchestrator routes against. All fields have sensible defaults
//! and are (de)serialisable via serde for TOML/JSON config files.

use serde::{Deserialize, Serialize};

// ── Default value functions ────────────────────────────────────────────

/// Default minimum fidelity for the quantum path.
fn default_min_fidelity() -> f64 {
    0.6
}

/// Default cost ceiling for the quantum path.
fn default_max_cost() -> f64 {
    100.0
}

/// Default qubit ceiling for the quantum and hybrid paths.
fn default_max_qubits() -> u32 {
    50
}

// ── ThresholdPolicy ────────────────────────────────────────────────────

/// Threshold configuration for the routing decision.
///
/// Set once at [`Orchestrator`](super::Orchestrator) construction and
/// read-only thereafter — no mutation during decisions.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdPolicy {
    /// Minimum estimated fidelity for the quantum path.
    ///
    /// Range: `0.0..=1.0`. Default: `0.6`. The hybrid path relaxes this
    /// bound to `0.8 × min_fidelity`.
    #[serde(default = "default_min_fidelity")]
    pub min_fidelity: f64,

    /// Maximum estimated cost for the quantum path.
    ///
    /// Default: `100.0`. The hybrid path does not consult this bound.
    #[serde(default = "default_max_cost")]
    pub max_cost: f64,

    /// Maximum qubit count for the quantum and hybrid paths.
    ///
    /// Default: `50`.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            min_fidelity: default_min_fidelity(),
            max_cost: default_max_cost(),
            max_qubits: default_max_qubits(),
        }
    }
}

impl ThresholdPolicy {
    /// Read the policy from the process environment.
    ///
    /// Recognised variables: `ROUTER_MIN_FIDELITY`, `ROUTER_MAX_COST`,
    /// `ROUTER_MAX_QUBITS`. Unset or unparseable variables fall back to the
    /// defaults.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            min_fidelity: env_parsed("ROUTER_MIN_FIDELITY", defaults.min_fidelity),
            max_cost: env_parsed("ROUTER_MAX_COST", defaults.max_cost),
            max_qubits: env_parsed("ROUTER_MAX_QUBITS", defaults.max_qubits),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Validate a [`ThresholdPolicy`], returning a list of human-readable errors.
///
/// # Arguments
///
/// * `policy` — The threshold policy to validate.
///
/// # Returns
///
/// An empty `Vec` on success, or one error string per violated constraint.
/// Validation collects *all* errors before returning (no short-circuit).
///
/// # Panics
///
/// This function never panics.
pub fn validate(policy: &ThresholdPolicy) -> Vec<String> {
    let mut errors = Vec::new();

    if policy.min_fidelity < 0.0 || policy.min_fidelity > 1.0 {
        errors.push(format!(
            "min_fidelity must be in [0.0, 1.0], got {}",
            policy.min_fidelity
        ));
    }

    if policy.max_cost < 0.0 {
        errors.push(format!("max_cost must be >= 0, got {}", policy.max_cost));
    }

    errors
}

// ── Tests ──────────────────────────────────────────────────────────────
