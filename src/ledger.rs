//! Decision result ledger.
//!
//! An external sink accepting one timestamped JSON record per decision,
//! append-only, one line per record. Not part of the decision logic itself —
//! callers invoke it after receiving a [`Decision`](crate::Decision).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::quantum::QuantumEstimate;
use crate::routing::{Decision, ExecutionPath};
use crate::{OrchestratorError, ProblemInstance};

/// One ledger line: a timestamped, flattened decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// RFC 3339 UTC timestamp taken when the record was built.
    pub ts: String,
    /// Number of assets in the routed problem.
    pub problem_size: usize,
    /// The execution path chosen.
    pub path: ExecutionPath,
    /// The policy outcome string attached to the decision.
    pub reason: String,
    /// Wall-clock duration of the classical baseline solve, in seconds.
    pub classical_time_s: f64,
    /// The quantum resource estimate that drove the decision.
    pub quantum: QuantumEstimate,
}

impl DecisionRecord {
    /// Build a record from a decision and the problem it was made for.
    pub fn from_decision(problem: &ProblemInstance, decision: &Decision) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            problem_size: problem.num_assets(),
            path: decision.path,
            reason: decision.reason.to_string(),
            classical_time_s: decision.metrics.classical_time_s,
            quantum: decision.metrics.quantum.clone(),
        }
    }
}

/// Append-only JSONL decision ledger.
///
/// The file is created on first append.
#[derive(Debug, Clone)]
pub struct DecisionLog {
    path: PathBuf,
}

impl DecisionLog {
    /// Create a ledger writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Serialize`] if the record cannot be
    /// serialised, or [`OrchestratorError::Ledger`] on any I/O failure.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn append(&self, record: &DecisionRecord) -> Result<(), OrchestratorError> {
        let line = serde_json::to_string(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| OrchestratorError::Ledger {
                file: self.path.display().to_string(),
                source: e,
            })?;

        writeln!(file, "{line}").map_err(|e| OrchestratorError::Ledger {
            file: self.path.display().to_string(),
            source: e,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
