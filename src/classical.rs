//! Classical baseline portfolio solver.
//!
//! ## Responsibility
//! Produce a baseline allocation by solving the Tikhonov-regularized
//! mean-variance system `(Σ + λI) w = μ`, normalizing to the budget, and
//! timing the attempt.
//!
//! ## Guarantees
//! - Never fails observably: any numerical failure (singular system,
//!   dimension mismatch, non-finite result) is replaced internally with a
//!   uniform equal-weight allocation.
//! - No I/O, no global state; the only side effect is the wall-clock timing.
//!
//! ## NOT Responsible For
//! - Routing decisions (that belongs to `routing`)
//! - Quantum resource estimation (that belongs to `quantum`)

use std::time::Instant;

use nalgebra::{DMatrix, DVector};
use tracing::warn;

use crate::ProblemInstance;

/// Floor applied to the weight sum before normalization, guarding against
/// division blow-up on near-zero (or negative) sums.
const SUM_FLOOR: f64 = 1e-12;

/// Result of a classical baseline solve.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicalResult {
    /// Allocation weights, length `n`. Normalized to the budget on the
    /// regular path; uniform summing to `1.0` on the fallback path.
    pub weights: Vec<f64>,
    /// Wall-clock duration of the solve attempt, in seconds.
    pub elapsed_seconds: f64,
}

/// Solve the regularized mean-variance baseline for `problem`.
///
/// Solves `(Σ + λI) w = μ` by LU decomposition, normalizes `w` by
/// `w.sum().max(1e-12)` and scales by the budget. On any numerical failure
/// the weights are replaced with the uniform allocation `1/n` per asset
/// (which sums to `1.0`, unscaled by the budget — no further processing
/// occurs after the substitution).
///
/// # Arguments
///
/// * `problem` — The problem instance to solve.
///
/// # Returns
///
/// A [`ClassicalResult`] carrying the weights and the elapsed solve time.
/// The caller always receives a weights vector, even if financially
/// nonsensical.
///
/// # Panics
///
/// This function never panics.
pub fn solve_baseline(problem: &ProblemInstance) -> ClassicalResult {
    let start = Instant::now();

    let weights = match solve_regularized(problem) {
        Some(weights) => weights,
        None => {
            warn!(
                assets = problem.num_assets(),
                "classical solve failed, substituting uniform allocation"
            );
            uniform_fallback(problem.num_assets())
        }
    };

    ClassicalResult {
        weights,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    }
}

/// Attempt the regularized solve. `None` signals any numerical failure.
fn solve_regularized(problem: &ProblemInstance) -> Option<Vec<f64>> {
    let n = problem.mu.len();
    if n == 0 || problem.sigma.len() != n || problem.sigma.iter().any(|row| row.len() != n) {
        return None;
    }

    let mut system = DMatrix::from_fn(n, n, |r, c| problem.sigma[r][c]);
    for i in 0..n {
        system[(i, i)] += problem.risk_lambda;
    }

    let mu = DVector::from_column_slice(&problem.mu);
    let solution = system.lu().solve(&mu)?;

    if solution.iter().any(|w| !w.is_finite()) {
        return None;
    }

    let denom = solution.sum().max(SUM_FLOOR);
    Some(
        solution
            .iter()
            .map(|w| w / denom * problem.budget)
            .collect(),
    )
}

/// Equal-weight allocation over `n` assets; empty when `n` is zero.
fn uniform_fallback(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

// ── Tests ──────────────────────────────────────────────────────────────
