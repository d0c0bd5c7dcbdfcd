//! # QACCEL Simulator
//!
//! Dense state-vector simulation for QACCEL: an n-qubit register, a small
//! fixed gate library, the Quantum Fourier Transform and the integer codec
//! that carries classical values in and out of the register.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qaccel_sim // L2-L6: Register → Simulator
//!     L2_Register // 상태 벡터
//!         Unitary // size-checked complex matrix
//!         QubitRegister // 2^n amplitudes, apply_unitary, measure
//!     L3_Gates // 게이트 라이브러리
//!         GateLibrary // X, H, Z, R_k, CNOT, SWAP
//!     L4_Transform // 변환
//!         QFT // forward + inverse
//!     L5_Boundary // 경계
//!         IntegerCodec // encode, decode
//!     L6_Simulator // 실행
//!         SimulatorConfig // serde settings
//!         Simulator // run, round_trip, modular_multiply
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qaccel_sim::prelude::*;
//!
//! let mut reg = QubitRegister::new(4).unwrap();
//! encode(5, &mut reg).unwrap();
//! apply_qft(&mut reg).unwrap();
//! apply_inverse_qft(&mut reg).unwrap();
//!
//! let bits = reg.measure();
//! assert_eq!(bits, "0101");
//! assert_eq!(decode(&bits).unwrap(), 5);
//! ```
//!
//! ## Simulator
//!
//! ```rust
//! use qaccel_sim::prelude::*;
//!
//! let config = SimulatorConfig::new(8).with_seed(42);
//! let mut sim = Simulator::new(config).unwrap();
//!
//! assert_eq!(sim.modular_multiply(7, 9, 10).unwrap(), 3);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Unitary matrices (Gantree: L2_Register → Unitary)
pub mod unitary;

/// State register (Gantree: L2_Register → QubitRegister)
pub mod register;

/// Gate library (Gantree: L3_Gates → GateLibrary)
pub mod gates;

/// Quantum Fourier Transform (Gantree: L4_Transform → QFT)
pub mod qft;

/// Integer codec (Gantree: L5_Boundary → IntegerCodec)
pub mod codec;

/// Simulator configuration (Gantree: L6_Simulator → SimulatorConfig)
pub mod config;

/// Simulator (Gantree: L6_Simulator → Simulator)
pub mod simulator;

// ============================================================================
// Re-exports
// ============================================================================

pub use codec::{decode, encode, to_bitstring};
pub use config::{MeasurementPolicy, SimulatorConfig};
pub use gates::apply_gate;
pub use qft::{apply_inverse_qft, apply_qft};
pub use register::QubitRegister;
pub use simulator::{RunResult, Simulator};
pub use unitary::Unitary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "QACCEL Simulator";

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qaccel_sim::prelude::*;
    //! ```

    pub use crate::codec::{decode, encode, to_bitstring};
    pub use crate::config::{MeasurementPolicy, SimulatorConfig};
    pub use crate::gates::apply_gate;
    pub use crate::qft::{apply_inverse_qft, apply_qft};
    pub use crate::register::QubitRegister;
    pub use crate::simulator::{RunResult, Simulator};
    pub use crate::unitary::Unitary;
    pub use qaccel_core::prelude::*;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::{NAME, VERSION};
    use approx::assert_abs_diff_eq;

    fn assert_same_state(a: &QubitRegister, b: &QubitRegister, epsilon: f64) {
        assert_eq!(a.dimension(), b.dimension());
        for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
            assert_abs_diff_eq!(x.re, y.re, epsilon = epsilon);
            assert_abs_diff_eq!(x.im, y.im, epsilon = epsilon);
        }
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "QACCEL Simulator");
    }

    #[test]
    fn test_builder_qft_matches_direct_qft() {
        for n in 1..=5 {
            let value = (1u64 << n) - 2;

            let mut direct = QubitRegister::new(n).unwrap();
            encode(value, &mut direct).unwrap();
            apply_qft(&mut direct).unwrap();

            let circuit = CircuitBuilder::new(n).encode(value).qft().build();
            let mut via_circuit = QubitRegister::new(n).unwrap();
            for gate in circuit.gates() {
                apply_gate(&mut via_circuit, gate).unwrap();
            }

            assert_same_state(&direct, &via_circuit, 1e-12);
        }
    }

    #[test]
    fn test_circuit_inverse_undoes_qft() {
        let n = 4;
        let forward = CircuitBuilder::new(n).qft().build();
        let mut full = CircuitBuilder::new(n).encode(9).build();
        full.append(&forward).unwrap();
        full.append(&forward.inverse()).unwrap();

        let mut sim = Simulator::with_qubits(n).unwrap();
        assert_eq!(sim.run(&full).unwrap().value, 9);
    }

    #[test]
    fn test_bell_scenario() {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let mut reg = QubitRegister::new(2).unwrap();
        let sim = Simulator::with_qubits(2).unwrap();
        sim.run_on(&mut reg, &circuit).unwrap();

        let s = std::f64::consts::FRAC_1_SQRT_2;
        let probs = reg.probabilities();
        assert_abs_diff_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[3], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(reg.get_amplitude(0).unwrap().re, s, epsilon = 1e-12);

        // Tie between |00⟩ and |11⟩ resolves to the lower index
        assert_eq!(reg.measure(), "00");
    }

    #[test]
    fn test_sampled_bell_collapses_to_correlated_outcome() {
        let config = SimulatorConfig::new(2)
            .with_measurement(MeasurementPolicy::Sampled)
            .with_seed(123);
        let mut sim = Simulator::new(config).unwrap();
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();

        let mut seen_00 = false;
        let mut seen_11 = false;
        for _ in 0..64 {
            let result = sim.run(&circuit).unwrap();
            match result.bitstring.as_str() {
                "00" => seen_00 = true,
                "11" => seen_11 = true,
                other => panic!("uncorrelated outcome {}", other),
            }
        }
        assert!(seen_00 && seen_11);
    }

    #[test]
    fn test_default_width_round_trip() {
        // N = 16: one representative value at the default register width
        let mut sim = Simulator::new(SimulatorConfig::default()).unwrap();
        let result = sim.round_trip(40_503).unwrap();
        assert_eq!(result.value, 40_503);
        assert_eq!(result.bitstring, to_bitstring(40_503, 16));
    }

    #[test]
    fn test_config_from_json_drives_simulator() {
        let json = r#"{ "num_qubits": 5, "measurement": "most_likely", "check_normalization": true }"#;
        let mut sim = Simulator::new(SimulatorConfig::from_json(json).unwrap()).unwrap();
        assert_eq!(sim.config().num_qubits, 5);
        assert_eq!(sim.modular_multiply(6, 7, 100).unwrap(), 10);
    }

    #[test]
    fn test_run_result_serializes() {
        let mut sim = Simulator::with_qubits(3).unwrap();
        let result = sim.round_trip(6).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"bitstring\":\"110\""));
        assert!(json.contains("\"value\":6"));
    }
}
