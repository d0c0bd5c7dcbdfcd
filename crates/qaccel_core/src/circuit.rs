//! Quantum circuit structure for QACCEL
//!
//! Gantree: L1_Circuit → Circuit
//!
//! An ordered gate sequence over a fixed number of qubits. Every gate is
//! validated on insertion, so a simulator can apply a `Circuit` without
//! re-checking operands.

use crate::error::{QaccelError, QaccelResult};
use crate::gate::Gate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Gate sequence
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> QaccelResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> QaccelResult<()> {
        self.validate_gate(&gate)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> QaccelResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Append all gates of another circuit
    pub fn append(&mut self, other: &Circuit) -> QaccelResult<()> {
        self.add_gates(other.gates.iter().copied())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Reversed circuit with every gate inverted
    /// Gantree: inverse(&self) -> Circuit // 역회로
    pub fn inverse(&self) -> Circuit {
        Circuit {
            num_qubits: self.num_qubits,
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
            name: self.name.as_ref().map(|n| format!("{}_dg", n)),
        }
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qubits = gate.qubits();
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);

            for &q in &qubits {
                if let Some(d) = qubit_depths.get_mut(q) {
                    *d = max_depth + 1;
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    /// Gantree: gate_count(&self) -> usize // 게이트 수
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check operand range and distinctness
    fn validate_gate(&self, gate: &Gate) -> QaccelResult<()> {
        let qubits = gate.qubits();
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit >= self.num_qubits {
                return Err(QaccelError::TargetIndexInvalid {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if qubits[..i].contains(&qubit) {
                return Err(QaccelError::DuplicateTarget { qubit });
            }
        }
        Ok(())
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = vec![
            "OPENQASM 2.0;".to_string(),
            "include \"qelib1.inc\";".to_string(),
            String::new(),
            format!("qreg q[{}];", self.num_qubits),
            format!("creg c[{}];", self.num_qubits),
            String::new(),
        ];

        lines.extend(self.gates.iter().map(Gate::to_qasm));

        lines.join("\n")
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({}: {} qubits, {} gates)",
            self.name().unwrap_or("unnamed"),
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
