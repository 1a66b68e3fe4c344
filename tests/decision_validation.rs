//! Decision validation test suite
//!
//! Exercises the full decision path end to end:
//! - Classical baseline on a well-conditioned system (never raises)
//! - Exact fallback estimate figures for a 2-asset problem
//! - Routing outcomes under default and tightened threshold policies
//! - Degrade-on-failure when the synthesis backend is forced to fail
//! - Idempotence and cost monotonicity of the routing rule

use std::sync::Arc;

use quantum_hybrid_orchestrator::{
    fallback_estimate, solve_baseline, EstimateSource, Orchestrator, ProblemInstance,
    QuantumEstimator, StaticBackend, SynthesisConfig, ThresholdPolicy, UnavailableBackend,
};

fn identity(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// The 2-asset instance used across the threshold scenarios.
fn two_asset_problem() -> ProblemInstance {
    ProblemInstance::new(vec![0.1, 0.2], identity(2))
}

fn orchestrator_with(policy: ThresholdPolicy) -> Orchestrator {
    Orchestrator::new(policy)
}

// -- classical baseline (scenario A) ------------------------------------

#[test]
fn test_well_conditioned_classical_weights_sum_to_one() {
    let result = solve_baseline(&two_asset_problem());
    let sum: f64 = result.weights.iter().sum();
    assert!(
        (sum - 1.0).abs() < 1e-9,
        "weights should sum to 1.0 within floating tolerance, got {sum}"
    );
}

// -- fallback estimate (scenario B) --------------------------------------

#[test]
fn test_two_asset_fallback_estimate_exact_values() {
    let estimate = fallback_estimate(&two_asset_problem());
    assert_eq!(estimate.qubits, 4);
    assert_eq!(estimate.depth, 16);
    assert!((estimate.fidelity - 0.87).abs() < 1e-12);
    assert!((estimate.estimated_cost - 10.08).abs() < 1e-9);
    assert_eq!(estimate.source, EstimateSource::Fallback);
}

// -- routing scenarios (C, D, E) -----------------------------------------

#[tokio::test]
async fn test_default_policy_routes_two_asset_problem_quantum() {
    // qubits(4) ≤ 50, fidelity(0.87) ≥ 0.6, cost(10.08) ≤ 100.
    let orchestrator = orchestrator_with(ThresholdPolicy::default());
    let decision = orchestrator.decide(&two_asset_problem()).await;

    assert!(decision.path.is_quantum());
    assert_eq!(decision.reason, "resource/fidelity/cost within thresholds");
}

#[tokio::test]
async fn test_tight_cost_ceiling_routes_hybrid() {
    // cost(10.08) > 5.0 fails the quantum branch; fidelity(0.87) ≥ 0.48
    // and qubits pass, so the hybrid branch takes it.
    let orchestrator = orchestrator_with(ThresholdPolicy {
        max_cost: 5.0,
        ..ThresholdPolicy::default()
    });
    let decision = orchestrator.decide(&two_asset_problem()).await;

    assert!(decision.path.is_hybrid());
    assert_eq!(decision.reason, "quantum useful for subproblem; using hybrid");
}

#[tokio::test]
async fn test_tight_qubit_ceiling_routes_classical() {
    // qubits(4) > 2 fails both the quantum and hybrid branches.
    let orchestrator = orchestrator_with(ThresholdPolicy {
        max_qubits: 2,
        ..ThresholdPolicy::default()
    });
    let decision = orchestrator.decide(&two_asset_problem()).await;

    assert!(decision.path.is_classical());
    assert_eq!(decision.reason, "default to classical");
}

// -- degrade-on-failure ---------------------------------------------------

#[tokio::test]
async fn test_forced_backend_failure_yields_fallback_shaped_estimate() {
    let estimator = QuantumEstimator::new(
        Arc::new(UnavailableBackend),
        SynthesisConfig::default(),
    );
    let problem = two_asset_problem();
    let estimate = estimator.estimate(&problem).await;

    assert_eq!(estimate.source, EstimateSource::Fallback);
    assert_eq!(estimate, fallback_estimate(&problem));
}

#[tokio::test]
async fn test_decision_with_failed_backend_matches_fallback_only_decision() {
    let with_failed_backend = Orchestrator::new(ThresholdPolicy::default())
        .with_quantum_estimator(QuantumEstimator::new(
            Arc::new(UnavailableBackend),
            SynthesisConfig::default(),
        ));
    let fallback_only = Orchestrator::new(ThresholdPolicy::default());

    let problem = two_asset_problem();
    let a = with_failed_backend.decide(&problem).await;
    let b = fallback_only.decide(&problem).await;

    assert_eq!(a.path, b.path);
    assert_eq!(a.reason, b.reason);
    assert_eq!(a.metrics.quantum, b.metrics.quantum);
}

#[tokio::test]
async fn test_synthesized_estimate_flows_into_routing() {
    // A 5-qubit, depth-20 synthesis: fidelity 0.8, cost 10.5 → quantum.
    let orchestrator = Orchestrator::new(ThresholdPolicy::default())
        .with_quantum_estimator(QuantumEstimator::new(
            Arc::new(StaticBackend::new(5, 20)),
            SynthesisConfig::default(),
        ));
    let decision = orchestrator.decide(&two_asset_problem()).await;

    assert_eq!(decision.metrics.quantum.source, EstimateSource::Synthesized);
    assert!(decision.path.is_quantum());
}

// -- idempotence ----------------------------------------------------------

#[tokio::test]
async fn test_identical_problems_yield_identical_path_and_reason() {
    let orchestrator = orchestrator_with(ThresholdPolicy::default());
    let problem = two_asset_problem();

    let first = orchestrator.decide(&problem).await;
    let second = orchestrator.decide(&problem).await;

    assert_eq!(first.path, second.path);
    assert_eq!(first.reason, second.reason);
    assert_eq!(first.metrics.quantum, second.metrics.quantum);
}

// -- monotonicity ---------------------------------------------------------

#[tokio::test]
async fn test_raising_cost_past_ceiling_never_restores_quantum() {
    // Hold qubits and fidelity fixed (same problem); sweep the ceiling
    // downward so the fixed estimated cost crosses it.
    let problem = two_asset_problem();
    let mut lost_quantum = false;

    for max_cost in [100.0, 20.0, 10.08, 10.0, 5.0, 1.0] {
        let orchestrator = orchestrator_with(ThresholdPolicy {
            max_cost,
            ..ThresholdPolicy::default()
        });
        let decision = orchestrator.decide(&problem).await;

        if !decision.path.is_quantum() {
            lost_quantum = true;
        }
        assert!(
            !(lost_quantum && decision.path.is_quantum()),
            "cost above the ceiling must never route back to quantum"
        );
    }
    assert!(lost_quantum, "the sweep should cross the cost ceiling");
}

// -- documented policy asymmetry ------------------------------------------

#[tokio::test]
async fn test_hybrid_branch_ignores_cost_asymmetry() {
    // The hybrid branch checks only qubits and the relaxed fidelity bound;
    // cost is deliberately not consulted. With a zero cost ceiling the
    // quantum branch is unreachable, yet the decision is still hybrid.
    let orchestrator = orchestrator_with(ThresholdPolicy {
        max_cost: 0.0,
        ..ThresholdPolicy::default()
    });
    let decision = orchestrator.decide(&two_asset_problem()).await;

    assert!(decision.path.is_hybrid());
}

// -- path/reason coherence -------------------------------------------------

#[tokio::test]
async fn test_path_and_reason_agree_across_problem_sizes() {
    let orchestrator = orchestrator_with(ThresholdPolicy::default());

    for n in [1, 2, 5, 11, 20, 40, 80] {
        let problem = ProblemInstance::new(vec![0.1; n], identity(n));
        let decision = orchestrator.decide(&problem).await;

        let expected_reason = if decision.path.is_quantum() {
            "resource/fidelity/cost within thresholds"
        } else if decision.path.is_hybrid() {
            "quantum useful for subproblem; using hybrid"
        } else {
            "default to classical"
        };
        assert_eq!(
            decision.reason, expected_reason,
            "reason must match the branch taken at n={n}"
        );
    }
}

// -- never-throw contracts --------------------------------------------------

#[tokio::test]
async fn test_mismatched_dimensions_still_produce_a_decision() {
    // 3 assets with a 2×2 covariance: the classical leaf substitutes the
    // uniform fallback and the decision call completes normally.
    let problem = ProblemInstance::new(vec![0.1, 0.2, 0.3], identity(2));
    let orchestrator = orchestrator_with(ThresholdPolicy::default());
    let decision = orchestrator.decide(&problem).await;

    assert!(
        decision.path.is_quantum()
            || decision.path.is_hybrid()
            || decision.path.is_classical()
    );
}

#[tokio::test]
async fn test_tracker_reflects_decisions_made() {
    let orchestrator = orchestrator_with(ThresholdPolicy::default());

    // n=2 → quantum; n=11 → hybrid (fidelity 0.51 in the relaxed band);
    // n=40 → classical (60 qubits over the ceiling).
    for n in [2, 11, 40] {
        let problem = ProblemInstance::new(vec![0.1; n], identity(n));
        let _ = orchestrator.decide(&problem).await;
    }

    let snap = orchestrator.tracker().snapshot();
    assert_eq!(snap.quantum, 1);
    assert_eq!(snap.hybrid, 1);
    assert_eq!(snap.classical, 1);
    assert_eq!(snap.total, 3);
    assert_eq!(snap.fallback_estimates, 3);
}
