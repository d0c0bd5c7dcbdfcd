//! Simulator configuration for QACCEL
//!
//! Gantree: L6_Simulator → SimulatorConfig
//!
//! Serializable settings for [`Simulator`](crate::Simulator) runs.

use qaccel_core::{numeric, register, QaccelError, QaccelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a finished run is read out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementPolicy {
    /// Highest-probability basis state, lowest index on ties; state untouched
    #[default]
    MostLikely,
    /// Weighted random draw followed by collapse onto the drawn state
    Sampled,
}

impl fmt::Display for MeasurementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementPolicy::MostLikely => write!(f, "most_likely"),
            MeasurementPolicy::Sampled => write!(f, "sampled"),
        }
    }
}

/// Simulator configuration
/// Gantree: SimulatorConfig // 시뮬레이터 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Register width for pipeline runs
    pub num_qubits: usize,

    /// Readout policy
    pub measurement: MeasurementPolicy,

    /// Seed for sampled measurement (entropy when absent)
    pub seed: Option<u64>,

    /// Log a warning when Σ|a|² drifts from 1 after a run
    pub check_normalization: bool,

    /// Allowed |Σ|a|² - 1| before warning
    pub normalization_tolerance: f64,
}

impl SimulatorConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Default configuration for `num_qubits`
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> QaccelResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QaccelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set number of qubits
    pub fn with_qubits(mut self, n: usize) -> Self {
        self.num_qubits = n;
        self
    }

    /// Set measurement policy
    pub fn with_measurement(mut self, policy: MeasurementPolicy) -> Self {
        self.measurement = policy;
        self
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the normalization check
    pub fn with_normalization_check(mut self, enabled: bool) -> Self {
        self.check_normalization = enabled;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> QaccelResult<()> {
        if register::dimension(self.num_qubits).is_none() {
            return Err(QaccelError::InvalidConfig(format!(
                "num_qubits {} is not addressable",
                self.num_qubits
            )));
        }
        if !self.normalization_tolerance.is_finite() || self.normalization_tolerance < 0.0 {
            return Err(QaccelError::InvalidConfig(format!(
                "normalization_tolerance must be finite and >= 0, got {}",
                self.normalization_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            num_qubits: register::DEFAULT_QUBITS,
            measurement: MeasurementPolicy::MostLikely,
            seed: None,
            check_normalization: false,
            normalization_tolerance: numeric::DEFAULT_TOLERANCE,
        }
    }
}

impl fmt::Display for SimulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SimulatorConfig:")?;
        writeln!(f, "  Qubits: {}", self.num_qubits)?;
        writeln!(f, "  Measurement: {}", self.measurement)?;
        writeln!(f, "  Seed: {:?}", self.seed)?;
        writeln!(
            f,
            "  Normalization check: {} (tol {:e})",
            self.check_normalization, self.normalization_tolerance
        )?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
