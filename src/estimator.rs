//! Hardware resource and fidelity estimation.
//!
//! Pure arithmetic over a hardware error profile: given a circuit's qubit
//! count and depth, produce an estimated logical fidelity and a linear cost
//! figure. The cost weights are fixed policy constants, not learned.
//!
//! | Input        | Effect                                     |
//! |--------------|--------------------------------------------|
//! | `depth`      | fidelity decays by `base_error_rate` per layer |
//! | `qubits`     | cost rises by `0.2` per qubit              |
//! | `depth`      | cost rises by `0.5` per layer              |

/// Error characteristics of the target quantum hardware.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareProfile {
    /// Per-layer error rate used for fidelity decay.
    pub base_error_rate: f64,
    /// Qubit ceiling of the modelled hardware.
    pub qubit_limit: u32,
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            base_error_rate: 0.01,
            qubit_limit: 60,
        }
    }
}

/// Estimated fidelity and cost for a (qubits, depth) pair.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceFigures {
    /// Estimated probability the computation produces a correct result.
    /// Clamped at `0.0`; legitimately `1.0` when depth is zero.
    pub fidelity: f64,
    /// Linear cost figure: `0.2 × qubits + 0.5 × depth`.
    pub estimated_cost: f64,
}

/// Pure fidelity/cost estimator over a [`HardwareProfile`].
///
/// Stateless and cheap to construct. A total function over its declared
/// domain — no failure modes, no I/O.
///
/// # Panics
///
/// This type and its methods never panic.
#[derive(Debug, Clone)]
pub struct ResourceEstimator {
    profile: HardwareProfile,
}

impl ResourceEstimator {
    /// Create an estimator with the default hardware profile
    /// (`base_error_rate = 0.01`, `qubit_limit = 60`).
    pub fn new() -> Self {
        Self {
            profile: HardwareProfile::default(),
        }
    }

    /// Create an estimator with a custom hardware profile.
    pub fn with_profile(profile: HardwareProfile) -> Self {
        Self { profile }
    }

    /// Return the hardware profile this estimator evaluates against.
    pub fn profile(&self) -> &HardwareProfile {
        &self.profile
    }

    /// Estimate fidelity and cost for a circuit of the given size.
    ///
    /// # Arguments
    ///
    /// * `qubits` — Quantum bit count of the circuit.
    /// * `depth` — Number of sequential operation layers.
    ///
    /// # Returns
    ///
    /// [`ResourceFigures`] with `fidelity = max(0, 1 − base_error_rate × depth)`
    /// and `estimated_cost = 0.2 × qubits + 0.5 × depth`.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn estimate(&self, qubits: u32, depth: u32) -> ResourceFigures {
        let fidelity = (1.0 - self.profile.base_error_rate * f64::from(depth)).max(0.0);
        let estimated_cost = 0.2 * f64::from(qubits) + 0.5 * f64::from(depth);

        ResourceFigures {
            fidelity,
            estimated_cost,
        }
    }
}

impl Default for ResourceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
