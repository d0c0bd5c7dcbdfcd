//! Circuit builder for QACCEL
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Fluent builder for circuits, including the integer-encoding prefix and
//! the QFT / inverse-QFT gate sequences.

use crate::circuit::Circuit;
use crate::error::{QaccelError, QaccelResult};
use crate::gate::Gate;
use crate::types::{PhaseExponent, QubitId};

/// Fluent circuit builder (consuming self pattern)
///
/// Gates whose operands are invalid for the circuit are skipped; use
/// [`Circuit::add_gate`] directly when the error matters.
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    /// Internal circuit being built
    /// Gantree: circuit: Circuit // 내부 회로
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Pauli-X gate
    /// Gantree: x(self, q) -> Self // X 추가
    pub fn x(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::X(qubit));
        self
    }

    /// Add Hadamard gate
    /// Gantree: h(self, q) -> Self // H 추가
    pub fn h(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::H(qubit));
        self
    }

    /// Add Pauli-Z gate
    pub fn z(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Z(qubit));
        self
    }

    /// Add phase rotation R_k
    /// Gantree: phase_rk(self, q, k) -> Self // R_k 추가
    pub fn phase_rk(mut self, qubit: QubitId, k: PhaseExponent) -> Self {
        let _ = self.circuit.add_gate(Gate::PhaseRk(qubit, k));
        self
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    /// Gantree: cnot(self, c, t) -> Self // CNOT 추가
    pub fn cnot(mut self, control: QubitId, target: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Cnot(control, target));
        self
    }

    /// Add SWAP gate
    pub fn swap(mut self, qubit1: QubitId, qubit2: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Swap(qubit1, qubit2));
        self
    }

    // ========================================================================
    // Composite Sequences
    // ========================================================================

    /// X on every qubit i where bit i of `value mod 2^n` is set
    /// Gantree: encode(self, value) -> Self // 정수 인코딩
    pub fn encode(mut self, value: u64) -> Self {
        let n = self.circuit.num_qubits();
        for i in 0..n.min(u64::BITS as usize) {
            if (value >> i) & 1 == 1 {
                let _ = self.circuit.add_gate(Gate::X(i));
            }
        }
        self
    }

    /// Reverse qubit order: SWAP(i, n-1-i) for i < n/2
    pub fn reverse_qubits(mut self) -> Self {
        let n = self.circuit.num_qubits();
        for i in 0..n / 2 {
            let _ = self.circuit.add_gate(Gate::Swap(i, n - 1 - i));
        }
        self
    }

    /// Forward QFT over the whole register
    ///
    /// For ascending i: H(i), then R_{j-i+1} on every j > i. The qubit-order
    /// reversal comes last.
    /// Gantree: qft(self) -> Self // QFT
    pub fn qft(mut self) -> Self {
        let n = self.circuit.num_qubits();
        for i in 0..n {
            let _ = self.circuit.add_gate(Gate::H(i));
            for j in (i + 1)..n {
                let _ = self.circuit.add_gate(Gate::PhaseRk(j, rk_exponent(i, j)));
            }
        }
        self.reverse_qubits()
    }

    /// Inverse QFT: exact reverse of [`qft`](Self::qft) with negated phases
    /// Gantree: inverse_qft(self) -> Self // 역 QFT
    pub fn inverse_qft(self) -> Self {
        let mut builder = self.reverse_qubits();
        let n = builder.circuit.num_qubits();
        for i in (0..n).rev() {
            for j in ((i + 1)..n).rev() {
                let _ = builder
                    .circuit
                    .add_gate(Gate::PhaseRk(j, -rk_exponent(i, j)));
            }
            let _ = builder.circuit.add_gate(Gate::H(i));
        }
        builder
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    /// Gantree: build(self) -> Circuit // 빌드
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build, rejecting a circuit wider than `max_qubits`
    pub fn build_for(self, max_qubits: usize) -> QaccelResult<Circuit> {
        if self.circuit.num_qubits() > max_qubits {
            return Err(QaccelError::RegisterTooNarrow {
                required: self.circuit.num_qubits(),
                available: max_qubits,
            });
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

/// k = j - i + 1 for the rotation on qubit j inside block i
fn rk_exponent(i: QubitId, j: QubitId) -> PhaseExponent {
    PhaseExponent::try_from(j - i + 1).unwrap_or(PhaseExponent::MAX)
}

// ============================================================================
// Tests
// ============================================================================
