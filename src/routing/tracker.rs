//! Decision outcome tracking.
//!
//! Counts how often each execution path was chosen and how many quantum
//! estimates came from the fallback formula rather than a real synthesis.
//!
//! Thread-safe: all counters use atomic operations for lock-free reads and
//! writes under concurrent decision calls.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::quantum::EstimateSource;

use super::orchestrator::ExecutionPath;

/// Per-path decision counters.
///
/// All operations are lock-free via atomics.
///
/// # Panics
///
/// This type and its methods never panic.
#[derive(Debug, Default)]
pub struct DecisionTracker {
    /// Decisions routed to the classical path.
    classical: AtomicU64,
    /// Decisions routed to the quantum path.
    quantum: AtomicU64,
    /// Decisions routed to the hybrid path.
    hybrid: AtomicU64,
    /// Estimates produced by the fallback formula.
    fallback_estimates: AtomicU64,
}

impl DecisionTracker {
    /// Create a new tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision outcome.
    ///
    /// # Arguments
    ///
    /// * `path` — The execution path that was chosen.
    /// * `source` — Which path produced the quantum estimate that drove it.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn record(&self, path: ExecutionPath, source: EstimateSource) {
        match path {
            ExecutionPath::Classical => self.classical.fetch_add(1, Ordering::Relaxed),
            ExecutionPath::Quantum => self.quantum.fetch_add(1, Ordering::Relaxed),
            ExecutionPath::Hybrid => self.hybrid.fetch_add(1, Ordering::Relaxed),
        };

        if source == EstimateSource::Fallback {
            self.fallback_estimates.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Return a snapshot of current counters.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn snapshot(&self) -> PathSnapshot {
        let classical = self.classical.load(Ordering::Relaxed);
        let quantum = self.quantum.load(Ordering::Relaxed);
        let hybrid = self.hybrid.load(Ordering::Relaxed);
        let total = classical + quantum + hybrid;

        PathSnapshot {
            classical,
            quantum,
            hybrid,
            fallback_estimates: self.fallback_estimates.load(Ordering::Relaxed),
            total,
            quantum_share_percent: if total > 0 {
                ((quantum + hybrid) as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        }
    }

    /// Reset all counters to zero.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn reset(&self) {
        self.classical.store(0, Ordering::Relaxed);
        self.quantum.store(0, Ordering::Relaxed);
        self.hybrid.store(0, Ordering::Relaxed);
        self.fallback_estimates.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of decision counters.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSnapshot {
    /// Decisions routed to the classical path.
    pub classical: u64,
    /// Decisions routed to the quantum path.
    pub quantum: u64,
    /// Decisions routed to the hybrid path.
    pub hybrid: u64,
    /// Quantum estimates produced by the fallback formula.
    pub fallback_estimates: u64,
    /// Total decisions recorded.
    pub total: u64,
    /// Share of decisions using any quantum resource (quantum + hybrid),
    /// as a percentage of the total.
    pub quantum_share_percent: f64,
}

// ── Tests ──────────────────────────────────────────────────────────────
