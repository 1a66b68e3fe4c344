//! # Stage: Execution-Path Routing
//!
//! ## Responsibility
//! Decide, per problem instance, whether the optimization should run on the
//! classical path, the quantum path, or a hybrid of the two. A configurable
//! [`ThresholdPolicy`] is applied to the quantum resource estimate; the
//! classical baseline is always computed as the reference point.
//!
//! ## Guarantees
//! - Deterministic: identical problem instances under identical backend
//!   availability produce identical `path` and `reason` (metrics may differ
//!   only in elapsed-time measurement).
//! - Never fails on its leaves' internal conditions: both sub-components
//!   carry "never throw" contracts by construction.
//! - Thread-safe: the decision tracker uses atomics; the policy is read-only
//!   after construction.
//! - Single-shot: no state machine beyond one evaluation per call.
//!
//! ## NOT Responsible For
//! - Solving the problem on the chosen path (callers act on the decision)
//! - Implementing a synthesis backend (that belongs to `synthesis`)
//! - Persisting decisions (that belongs to `ledger`, invoked by the caller)

pub mod config;
pub mod orchestrator;
pub mod tracker;

// Re-exports for convenience
pub use config::ThresholdPolicy;
pub use orchestrator::{Decision, DecisionMetrics, ExecutionPath, Orchestrator};
pub use tracker::{DecisionTracker, PathSnapshot};
