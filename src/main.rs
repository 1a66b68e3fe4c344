//! Demo binary for quantum-hybrid-orchestrator
//!
//! Routes a batch of portfolio problems of growing size, appends each
//! decision to a JSONL ledger, and reports the outcome counters.
//!
//! ## Environment Variables
//!
//! - `LOG_FORMAT=json` — structured JSON output (production)
//! - `RUST_LOG=info` — log level filter (default: info)
//! - `ROUTER_MIN_FIDELITY` / `ROUTER_MAX_COST` / `ROUTER_MAX_QUBITS` —
//!   threshold policy overrides
//! - `LEDGER_PATH` — decision ledger file (default: decisions.jsonl)

use quantum_hybrid_orchestrator::{
    init_tracing, DecisionLog, DecisionRecord, Orchestrator, ProblemInstance, ThresholdPolicy,
};
use tracing::info;

/// Build a synthetic problem: mildly correlated assets with a return spread.
fn demo_problem(n: usize) -> ProblemInstance {
    let mu = (0..n).map(|i| 0.05 + 0.01 * i as f64).collect();
    let sigma = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 1.0 } else { 0.1 })
                .collect()
        })
        .collect();
    ProblemInstance::new(mu, sigma)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_tracing();

    info!("starting quantum-hybrid-orchestrator demo");

    let policy = ThresholdPolicy::from_env();
    let orchestrator = Orchestrator::new(policy.clone());
    let ledger_path =
        std::env::var("LEDGER_PATH").unwrap_or_else(|_| "decisions.jsonl".to_string());
    let ledger = DecisionLog::new(&ledger_path);

    info!(
        min_fidelity = policy.min_fidelity,
        max_cost = policy.max_cost,
        max_qubits = policy.max_qubits,
        "threshold policy loaded"
    );

    // Problem sizes chosen to exercise all three routing outcomes under the
    // default policy: small stays quantum, mid lands in the relaxed hybrid
    // band, large exceeds the qubit ceiling.
    for n in [2, 5, 11, 25, 40] {
        let problem = demo_problem(n);
        let decision = orchestrator.decide(&problem).await;

        info!(
            assets = n,
            path = %decision.path,
            reason = decision.reason,
            classical_time_s = decision.metrics.classical_time_s,
            "decision made"
        );

        let record = DecisionRecord::from_decision(&problem, &decision);
        if let Err(e) = ledger.append(&record) {
            tracing::error!(error = %e, "failed to append decision record");
        }
    }

    let snap = orchestrator.tracker().snapshot();
    info!(
        total = snap.total,
        classical = snap.classical,
        quantum = snap.quantum,
        hybrid = snap.hybrid,
        fallback_estimates = snap.fallback_estimates,
        quantum_share_percent = snap.quantum_share_percent,
        "decision summary"
    );

    let figures = orchestrator.resource_estimator().estimate(4, 16);
    info!(
        fidelity = figures.fidelity,
        cost = figures.estimated_cost,
        "reference hardware figures for a 4-qubit, depth-16 circuit"
    );

    info!(ledger = %ledger.path().display(), "demo complete");

    Ok(())
}
