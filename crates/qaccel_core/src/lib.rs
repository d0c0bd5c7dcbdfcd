//! # QACCEL Core
//!
//! Core types, gates, and circuits for the QACCEL state-vector simulator.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qaccel_core // L0+L1: Foundation + Circuit
//!     L0_Foundation // 기반 타입/상수/에러
//!         CoreTypes // QubitId, Amplitude, Bitstring
//!         Constants // gate/register/numeric constants
//!         Errors // QaccelError
//!     L1_Circuit // 회로 구조
//!         Gate // X, H, Z, R_k, CNOT, SWAP
//!         Circuit // ordered, validated gate sequence
//!         CircuitBuilder // encode, QFT, inverse QFT
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qaccel_core::prelude::*;
//!
//! // Encode 5 on 4 qubits, then QFT and its inverse
//! let circuit = CircuitBuilder::new(4)
//!     .encode(5)
//!     .qft()
//!     .inverse_qft()
//!     .build();
//!
//! assert_eq!(circuit.num_qubits(), 4);
//! println!("{}", circuit.to_qasm());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{gates, numeric, register};
pub use error::{QaccelError, QaccelResult};
pub use gate::Gate;
pub use types::{Amplitude, Bitstring, PhaseExponent, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qaccel_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{gates, numeric, register};
    pub use crate::error::{QaccelError, QaccelResult};
    pub use crate::gate::Gate;
    pub use crate::types::{Amplitude, Bitstring, PhaseExponent, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_round_trip_circuit_structure() {
        let circuit = CircuitBuilder::new(4)
            .encode(5)
            .qft()
            .inverse_qft()
            .build();

        // 2 X + 2 * (4 H + 6 R_k + 2 SWAP)
        assert_eq!(circuit.gate_count(), 2 + 2 * 12);
        assert_eq!(circuit.count_2q(), 4);
    }

    #[test]
    fn test_bitstring_matches_encode() {
        let circuit = CircuitBuilder::new(6).encode(0b101101).build();
        let bits = Bitstring::from_value(0b101101, 6);

        for gate in circuit.gates() {
            if let Gate::X(q) = gate {
                assert_eq!(bits.qubit(*q), Some(true));
            }
        }
        assert_eq!(circuit.gate_count(), bits.popcount());
    }

    #[test]
    fn test_constants() {
        assert_eq!(register::DEFAULT_QUBITS, 16);
        assert_eq!(register::dimension(register::DEFAULT_QUBITS), Some(1 << 16));
        assert!(numeric::DEFAULT_TOLERANCE <= 1e-9);
    }

    #[test]
    fn test_empty_register_circuits() {
        let circuit = CircuitBuilder::new(0).encode(9).qft().inverse_qft().build();
        assert!(circuit.is_empty());
    }
}
