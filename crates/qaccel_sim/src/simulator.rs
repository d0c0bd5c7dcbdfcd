//! State-vector simulator for QACCEL
//!
//! Gantree: L6_Simulator → Simulator
//!
//! Runs gate-list circuits against a fresh [`QubitRegister`] and drives the
//! integer round trip: encode, QFT, inverse QFT, measure, decode.

use crate::codec;
use crate::config::{MeasurementPolicy, SimulatorConfig};
use crate::gates;
use crate::qft;
use crate::register::QubitRegister;
use qaccel_core::{Circuit, QaccelError, QaccelResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one simulator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Measured basis state, MSB first
    pub bitstring: String,

    /// Decoded integer of `bitstring`
    pub value: u64,

    /// Gates applied before measurement
    pub gates_applied: usize,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunResult(bits={}, value={}, gates={})",
            self.bitstring, self.value, self.gates_applied
        )
    }
}

/// Simulator
/// Gantree: Simulator // 시뮬레이터
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
    rng: StdRng,
}

impl Simulator {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from a validated config
    pub fn new(config: SimulatorConfig) -> QaccelResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::debug!(
            "simulator ready: {} qubits, {} measurement",
            config.num_qubits,
            config.measurement
        );
        Ok(Self { config, rng })
    }

    /// Default config at `num_qubits`
    pub fn with_qubits(num_qubits: usize) -> QaccelResult<Self> {
        Self::new(SimulatorConfig::new(num_qubits))
    }

    /// Active configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    // ========================================================================
    // Circuit Execution
    // ========================================================================

    /// Run `circuit` on a fresh ground-state register and measure
    /// Gantree: run(circuit) -> Result<RunResult> // 회로 실행
    pub fn run(&mut self, circuit: &Circuit) -> QaccelResult<RunResult> {
        log::debug!("running circuit {}", circuit.name().unwrap_or("unnamed"));
        let mut reg = QubitRegister::new(circuit.num_qubits())?;
        let gates_applied = self.run_on(&mut reg, circuit)?;
        self.finish(&mut reg, gates_applied)
    }

    /// Apply every gate of `circuit` to `reg` in order
    ///
    /// Returns the number of gates applied. Stops at the first failing gate,
    /// leaving the earlier gates applied.
    pub fn run_on(&self, reg: &mut QubitRegister, circuit: &Circuit) -> QaccelResult<usize> {
        if circuit.num_qubits() > reg.size() {
            return Err(QaccelError::RegisterTooNarrow {
                required: circuit.num_qubits(),
                available: reg.size(),
            });
        }

        for (i, gate) in circuit.gates().iter().enumerate() {
            log::trace!("gate {}: {}", i, gate);
            gates::apply_gate(reg, gate)?;
        }
        Ok(circuit.gate_count())
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// Encode `value`, apply QFT then inverse QFT, measure and decode
    ///
    /// Uses a fresh register of `config.num_qubits`; the result is
    /// `value mod 2^N`.
    /// Gantree: round_trip(value) -> Result<RunResult> // 왕복 변환
    pub fn round_trip(&mut self, value: u64) -> QaccelResult<RunResult> {
        let mut reg = QubitRegister::new(self.config.num_qubits)?;
        codec::encode(value, &mut reg)?;
        qft::apply_qft(&mut reg)?;
        qft::apply_inverse_qft(&mut reg)?;

        let gates_applied = round_trip_gate_count(reg.size(), value);
        self.finish(&mut reg, gates_applied)
    }

    /// `(a·b) mod modulus`, reduced mod 2^N and carried through the register
    /// Gantree: modular_multiply(a, b, m) -> Result<u64> // 모듈러 곱셈
    pub fn modular_multiply(&mut self, a: u64, b: u64, modulus: u64) -> QaccelResult<u64> {
        if modulus == 0 {
            return Err(QaccelError::InvalidModulus(modulus));
        }

        let product = (u128::from(a) * u128::from(b)) % u128::from(modulus);
        // product < modulus <= u64::MAX
        let product = u64::try_from(product).map_err(|_| QaccelError::InvalidModulus(modulus))?;
        log::debug!("({} * {}) mod {} = {}", a, b, modulus, product);

        Ok(self.round_trip(product)?.value)
    }

    // ========================================================================
    // Readout
    // ========================================================================

    fn finish(&mut self, reg: &mut QubitRegister, gates_applied: usize) -> QaccelResult<RunResult> {
        if self.config.check_normalization {
            let norm = reg.norm_squared();
            if (norm - 1.0).abs() > self.config.normalization_tolerance {
                log::warn!(
                    "state norm drifted to {:.12} (tolerance {:e})",
                    norm,
                    self.config.normalization_tolerance
                );
            }
        }

        let bitstring = match self.config.measurement {
            MeasurementPolicy::MostLikely => reg.measure(),
            MeasurementPolicy::Sampled => reg.measure_sampled(&mut self.rng),
        };
        let value = codec::decode(&bitstring)?;

        Ok(RunResult {
            bitstring,
            value,
            gates_applied,
        })
    }
}

/// X per set bit, n(n+1)/2 forward gates and n/2 swaps, doubled for the inverse
fn round_trip_gate_count(n: usize, value: u64) -> usize {
    let encoded = if n >= u64::BITS as usize {
        value.count_ones() as usize
    } else {
        (value & ((1u64 << n) - 1)).count_ones() as usize
    };
    let qft = n * (n + 1) / 2 + n / 2;
    encoded + 2 * qft
}

// ============================================================================
// Tests
// ============================================================================
