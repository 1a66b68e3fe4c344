//! Synthesis backend abstraction and implementations
//!
//! Provides the SynthesisBackend trait and the built-in implementations:
//! - UnavailableBackend: null variant, always present as the safe default
//! - StaticBackend: testing/demo backend returning a fixed outcome
//!
//! A synthesis backend compiles an abstract circuit description into a
//! concrete resource estimate (qubits, depth) for a target hardware.
//! Backend absence or failure is a normal, handled condition — the quantum
//! estimator degrades to its closed-form fallback and never surfaces an
//! error to its caller.
//!
//! ## Environment Variables
//!
//! - `SYNTH_HW_TARGET`: hardware target identifier (default: "generic")
//! - `SYNTH_MAX_QUBITS`: max-qubit synthesis preference (default: 80)
//! - `SYNTH_BASE_ERROR_RATE`: per-layer error rate (default: 0.01)
//! - `SYNTH_COST_PER_DEPTH`: cost weight per circuit layer (default: 0.5)
//! - `SYNTH_TIMEOUT_MS`: bound on a single synthesis attempt (default: 10000)

use async_trait::async_trait;

/// A single gate in a circuit model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Pauli-X on the given qubit.
    PauliX(u32),
    /// Hadamard on the given qubit.
    Hadamard(u32),
}

/// Minimal abstract circuit description handed to a synthesis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitModel {
    /// Model name, used by backends for artifact labelling.
    pub name: String,
    /// Gate sequence.
    pub gates: Vec<Gate>,
}

impl CircuitModel {
    /// The one-qubit demonstration circuit submitted for resource estimation:
    /// X followed by H on a single allocated qubit.
    pub fn demo() -> Self {
        Self {
            name: "portfolio_demo".to_string(),
            gates: vec![Gate::PauliX(0), Gate::Hadamard(0)],
        }
    }

    /// Number of distinct qubits referenced by the gate sequence.
    pub fn num_qubits(&self) -> u32 {
        self.gates
            .iter()
            .map(|g| match g {
                Gate::PauliX(q) | Gate::Hadamard(q) => q + 1,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Preferences forwarded with each synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisPreferences {
    /// Hardware target identifier (e.g. "generic").
    pub hardware_target: String,
    /// Upper bound on qubits the synthesized circuit may use.
    pub max_qubits: u32,
}

/// Concrete resource figures returned by a successful synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// Qubit count of the synthesized circuit.
    pub qubits: u32,
    /// Depth (sequential layers) of the synthesized circuit.
    pub depth: u32,
}

/// Errors a synthesis backend may produce.
///
/// None of these escape the quantum estimator — they are visible to its
/// caller only as `source = Fallback` on the returned estimate.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// No synthesis backend is available in this process.
    #[error("no synthesis backend available")]
    Unavailable,

    /// The backend reported a synthesis failure.
    #[error("synthesis backend failed: {0}")]
    Backend(String),

    /// The bounded synthesis attempt exceeded its deadline.
    #[error("synthesis timed out after {0} ms")]
    Timeout(u64),
}

/// Trait for external circuit synthesis backends.
///
/// Implementations must be thread-safe (Send + Sync) for use across tasks.
/// The trait is object-safe to allow dynamic dispatch via
/// `Arc<dyn SynthesisBackend>`.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Synthesize the circuit model for the given preferences.
    ///
    /// Returns the concrete qubit/depth figures of the compiled circuit.
    async fn synthesize(
        &self,
        circuit: &CircuitModel,
        preferences: &SynthesisPreferences,
    ) -> Result<SynthesisOutcome, SynthesisError>;
}

// ============================================================================
// Unavailable Backend (null variant)
// ============================================================================

/// The always-present null backend.
///
/// Every synthesis attempt fails with [`SynthesisError::Unavailable`], which
/// the quantum estimator maps to its closed-form fallback. Injecting this
/// variant makes the fallback path trivially testable without any global
/// availability flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

#[async_trait]
impl SynthesisBackend for UnavailableBackend {
    async fn synthesize(
        &self,
        _circuit: &CircuitModel,
        _preferences: &SynthesisPreferences,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        Err(SynthesisError::Unavailable)
    }
}

// ============================================================================
// Static Backend (testing/demo)
// ============================================================================

/// Testing/demo backend returning a fixed synthesis outcome.
///
/// Useful for exercising the synthesized estimate path without a real
/// synthesis service. An optional simulated latency allows timeout testing.
#[derive(Debug, Clone, Copy)]
pub struct StaticBackend {
    outcome: SynthesisOutcome,
    /// Simulated synthesis latency.
    pub delay_ms: u64,
}

impl StaticBackend {
    /// Create a backend that always reports the given qubits and depth.
    pub fn new(qubits: u32, depth: u32) -> Self {
        Self {
            outcome: SynthesisOutcome { qubits, depth },
            delay_ms: 0,
        }
    }

    /// Set a simulated synthesis latency.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[async_trait]
impl SynthesisBackend for StaticBackend {
    async fn synthesize(
        &self,
        _circuit: &CircuitModel,
        _preferences: &SynthesisPreferences,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.delay_ms)).await;
        }
        Ok(self.outcome)
    }
}

// ============================================================================
// Synthesis configuration
// ============================================================================

/// Settings for the synthesized estimate path, read once at process start.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    /// Hardware target identifier forwarded to the backend.
    pub hardware_target: String,
    /// Max-qubit preference forwarded to the backend.
    pub max_qubits: u32,
    /// Per-layer error rate applied to synthesized depth figures.
    pub base_error_rate: f64,
    /// Cost weight per circuit layer for synthesized estimates.
    pub cost_per_depth: f64,
    /// Bound on a single synthesis attempt, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            hardware_target: "generic".to_string(),
            max_qubits: 80,
            base_error_rate: 0.01,
            cost_per_depth: 0.5,
            timeout_ms: 10_000,
        }
    }
}

impl SynthesisConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset or unparseable variables fall back to the documented defaults.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            hardware_target: std::env::var("SYNTH_HW_TARGET")
                .unwrap_or(defaults.hardware_target),
            max_qubits: env_parsed("SYNTH_MAX_QUBITS", defaults.max_qubits),
            base_error_rate: env_parsed("SYNTH_BASE_ERROR_RATE", defaults.base_error_rate),
            cost_per_depth: env_parsed("SYNTH_COST_PER_DEPTH", defaults.cost_per_depth),
            timeout_ms: env_parsed("SYNTH_TIMEOUT_MS", defaults.timeout_ms),
        }
    }

    /// Build the per-request preferences from this configuration.
    pub fn preferences(&self) -> SynthesisPreferences {
        SynthesisPreferences {
            hardware_target: self.hardware_target.clone(),
            max_qubits: self.max_qubits,
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

// ── Tests ──────────────────────────────────────────────────────────────
