//! Quantum gate definitions for QACCEL
//!
//! Gantree: L1_Circuit → Gate
//!
//! Value representation of the gates the simulator's gate library can
//! apply. Each variant maps onto exactly one matrix in `qaccel_sim::gates`.

use crate::constants::gates::phase_angle;
use crate::types::{PhaseExponent, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum gate enumeration
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================
    /// Pauli-X gate (NOT)
    /// Gantree: X(QubitId) // 파울리 X
    X(QubitId),

    /// Hadamard gate
    /// Gantree: H(QubitId) // 하다마드
    H(QubitId),

    /// Pauli-Z gate
    /// Gantree: Z(QubitId) // 파울리 Z
    Z(QubitId),

    /// Phase rotation diag(1, e^{i·2π/2^k}); negative k rotates backwards
    /// Gantree: PhaseRk(QubitId, k) // 위상 회전
    PhaseRk(QubitId, PhaseExponent),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (control, target)
    /// Gantree: CNOT(QubitId, QubitId) // ctrl, tgt
    Cnot(QubitId, QubitId),

    /// SWAP gate
    /// Gantree: SWAP(QubitId, QubitId) // 스왑
    Swap(QubitId, QubitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Qubits in target-list order (first entry is local bit 0)
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::X(q) | Gate::H(q) | Gate::Z(q) | Gate::PhaseRk(q, _) => vec![*q],
            Gate::Cnot(a, b) | Gate::Swap(a, b) => vec![*a, *b],
        }
    }

    /// Check if gate is single-qubit
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::X(_) | Gate::H(_) | Gate::Z(_) | Gate::PhaseRk(_, _)
        )
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cnot(_, _) | Gate::Swap(_, _))
    }

    /// Check if gate is its own inverse (R_0 is identity, R_1 is Z)
    pub fn is_self_inverse(&self) -> bool {
        !matches!(self, Gate::PhaseRk(_, k) if k.abs() > 1)
    }

    /// Inverse gate
    /// Gantree: inverse(&self) -> Gate // 역 게이트
    pub fn inverse(&self) -> Gate {
        match *self {
            Gate::PhaseRk(q, k) => Gate::PhaseRk(q, -k),
            other => other,
        }
    }

    /// OpenQASM mnemonic (R_k maps onto `p`)
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X(_) => "x",
            Gate::H(_) => "h",
            Gate::Z(_) => "z",
            Gate::PhaseRk(_, _) => "p",
            Gate::Cnot(_, _) => "cx",
            Gate::Swap(_, _) => "swap",
        }
    }

    /// Convert to OpenQASM 2.0 string
    ///
    /// R_k is emitted as the equivalent `p(λ)` gate.
    pub fn to_qasm(&self) -> String {
        let name = self.name();
        match self {
            Gate::X(q) | Gate::H(q) | Gate::Z(q) => format!("{} q[{}];", name, q),
            Gate::PhaseRk(q, k) => format!("{}({}) q[{}];", name, phase_angle(*k), q),
            Gate::Cnot(a, b) | Gate::Swap(a, b) => format!("{} q[{}],q[{}];", name, a, b),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
