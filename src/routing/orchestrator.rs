//! Execution-path routing logic.
//!
//! The [`Orchestrator`] combines the classical baseline solver and the
//! quantum resource estimator under a [`ThresholdPolicy`](super::ThresholdPolicy)
//! to decide which execution path should serve each problem instance, and
//! records each outcome in a [`DecisionTracker`](super::DecisionTracker).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classical::solve_baseline;
use crate::estimator::ResourceEstimator;
use crate::quantum::{QuantumEstimate, QuantumEstimator};
use crate::ProblemInstance;

use super::config::ThresholdPolicy;
use super::tracker::DecisionTracker;

/// Reason attached to quantum-path decisions.
pub const REASON_WITHIN_THRESHOLDS: &str = "resource/fidelity/cost within thresholds";
/// Reason attached to hybrid-path decisions.
pub const REASON_HYBRID_SUBPROBLEM: &str = "quantum useful for subproblem; using hybrid";
/// Reason attached to classical-path decisions.
pub const REASON_DEFAULT_CLASSICAL: &str = "default to classical";

/// The execution path chosen for a single problem instance.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPath {
    /// Run the full optimization classically.
    Classical,
    /// Run on the quantum path (all thresholds satisfied).
    Quantum,
    /// Use quantum estimation for a subproblem alongside classical
    /// computation (relaxed fidelity bound).
    Hybrid,
}

impl ExecutionPath {
    /// Return `true` if the decision routes to the classical path.
    pub fn is_classical(self) -> bool {
        matches!(self, Self::Classical)
    }

    /// Return `true` if the decision routes to the quantum path.
    pub fn is_quantum(self) -> bool {
        matches!(self, Self::Quantum)
    }

    /// Return `true` if the decision routes to the hybrid path.
    pub fn is_hybrid(self) -> bool {
        matches!(self, Self::Hybrid)
    }
}

impl std::fmt::Display for ExecutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Classical => "classical",
            Self::Quantum => "quantum",
            Self::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

/// The metrics that justified a [`Decision`].
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMetrics {
    /// Wall-clock duration of the classical baseline solve, in seconds.
    pub classical_time_s: f64,
    /// The quantum resource estimate the thresholds were applied to.
    pub quantum: QuantumEstimate,
}

/// The routing decision for a single problem instance.
///
/// Immutable; one per orchestrator call, with no identity or lifecycle
/// beyond the call that produced it.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    /// The execution path chosen.
    pub path: ExecutionPath,
    /// Human-readable justification, drawn from the fixed set of policy
    /// outcome strings.
    pub reason: &'static str,
    /// The metrics that justified the decision.
    pub metrics: DecisionMetrics,
}

/// Execution-path orchestrator.
///
/// Composes the classical baseline solve and the quantum resource estimate
/// under an immutable threshold policy. Stateless across calls except for
/// the policy and the outcome tracker.
///
/// # Panics
///
/// This type and its methods never panic.
pub struct Orchestrator {
    policy: ThresholdPolicy,
    resources: ResourceEstimator,
    quantum: QuantumEstimator,
    tracker: DecisionTracker,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("policy", &self.policy)
            .field("quantum", &self.quantum)
            .finish()
    }
}

impl Orchestrator {
    /// Create an orchestrator with the given policy, the default hardware
    /// profile, and a fallback-only quantum estimator.
    ///
    /// # Arguments
    ///
    /// * `policy` — Routing thresholds, read-only for the orchestrator's
    ///   lifetime.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self {
            policy,
            resources: ResourceEstimator::new(),
            quantum: QuantumEstimator::fallback_only(),
            tracker: DecisionTracker::new(),
        }
    }

    /// Replace the resource estimator.
    pub fn with_resource_estimator(mut self, resources: ResourceEstimator) -> Self {
        self.resources = resources;
        self
    }

    /// Replace the quantum estimator (e.g. to inject a synthesis backend).
    pub fn with_quantum_estimator(mut self, quantum: QuantumEstimator) -> Self {
        self.quantum = quantum;
        self
    }

    /// Decide the execution path for `problem`.
    ///
    /// Obtains the classical baseline and the quantum resource estimate —
    /// two independent, order-insensitive sub-calls — then applies the
    /// routing rule in this exact precedence:
    ///
    /// 1. qubits, fidelity, and cost all within thresholds → `Quantum`
    /// 2. qubits within threshold and fidelity ≥ `0.8 × min_fidelity`
    ///    → `Hybrid` (cost is deliberately not consulted here)
    /// 3. otherwise → `Classical`
    ///
    /// # Arguments
    ///
    /// * `problem` — The problem instance to route. Assumed well-formed;
    ///   malformed input degrades through the leaves' fallback contracts.
    ///
    /// # Returns
    ///
    /// A [`Decision`] with the chosen path, its justification, and the
    /// metrics both sub-calls produced.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub async fn decide(&self, problem: &ProblemInstance) -> Decision {
        let classical = solve_baseline(problem);
        let quantum = self.quantum.estimate(problem).await;

        let (path, reason) = route(&self.policy, &quantum);
        self.tracker.record(path, quantum.source);

        info!(
            path = %path,
            reason,
            qubits = quantum.qubits,
            fidelity = quantum.fidelity,
            cost = quantum.estimated_cost,
            source = ?quantum.source,
            "routing decision"
        );

        Decision {
            path,
            reason,
            metrics: DecisionMetrics {
                classical_time_s: classical.elapsed_seconds,
                quantum,
            },
        }
    }

    /// Return the threshold policy in effect.
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Return the decision outcome tracker.
    pub fn tracker(&self) -> &DecisionTracker {
        &self.tracker
    }

    /// Return the hardware resource estimator for raw figure queries.
    pub fn resource_estimator(&self) -> &ResourceEstimator {
        &self.resources
    }
}

/// Apply the threshold ladder to one quantum estimate.
fn route(policy: &ThresholdPolicy, quantum: &QuantumEstimate) -> (ExecutionPath, &'static str) {
    if quantum.qubits <= policy.max_qubits
        && quantum.fidelity >= policy.min_fidelity
        && quantum.estimated_cost <= policy.max_cost
    {
        (ExecutionPath::Quantum, REASON_WITHIN_THRESHOLDS)
    } else if quantum.qubits <= policy.max_qubits
        && quantum.fidelity >= policy.min_fidelity * 0.8
    {
        // Cost is not consulted on this branch.
        (ExecutionPath::Hybrid, REASON_HYBRID_SUBPROBLEM)
    } else {
        (ExecutionPath::Classical, REASON_DEFAULT_CLASSICAL)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
