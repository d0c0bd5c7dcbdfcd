//! Gate library for QACCEL
//!
//! Gantree: L3_Gates → GateLibrary
//!
//! Stateless functions that build one fixed matrix and hand it to
//! [`QubitRegister::apply_unitary`] with an explicit target list. Two-qubit
//! matrices use the first listed qubit as local bit 0.

use crate::register::QubitRegister;
use crate::unitary::Unitary;
use qaccel_core::gates::{phase_angle, INV_SQRT_2};
use qaccel_core::{Amplitude, Gate, PhaseExponent, QaccelResult, QubitId};

const ZERO: Amplitude = Amplitude::new(0.0, 0.0);
const ONE: Amplitude = Amplitude::new(1.0, 0.0);

// ============================================================================
// Matrices
// ============================================================================

/// Pauli-X: [[0,1],[1,0]]
pub fn x_matrix() -> Unitary {
    Unitary::diagonal(&[ZERO, ZERO]).with_entries(&[(0, 1, ONE), (1, 0, ONE)])
}

/// Hadamard: 1/√2 [[1,1],[1,-1]]
pub fn h_matrix() -> Unitary {
    let s = Amplitude::new(INV_SQRT_2, 0.0);
    Unitary::diagonal(&[s, -s]).with_entries(&[(0, 1, s), (1, 0, s)])
}

/// Pauli-Z: diag(1, -1)
pub fn z_matrix() -> Unitary {
    Unitary::diagonal(&[ONE, -ONE])
}

/// CNOT over targets `[control, target]`: swaps local |01⟩ and |11⟩
pub fn cnot_matrix() -> Unitary {
    Unitary::diagonal(&[ONE, ZERO, ONE, ZERO]).with_entries(&[(1, 3, ONE), (3, 1, ONE)])
}

/// SWAP: exchanges local |01⟩ and |10⟩
pub fn swap_matrix() -> Unitary {
    Unitary::diagonal(&[ONE, ZERO, ZERO, ONE]).with_entries(&[(1, 2, ONE), (2, 1, ONE)])
}

/// R_k: diag(1, e^{i·2π/2^k}); negative k conjugates the phase
pub fn phase_rk_matrix(k: PhaseExponent) -> Unitary {
    Unitary::diagonal(&[ONE, Amplitude::from_polar(1.0, phase_angle(k))])
}

// ============================================================================
// Gate Application
// ============================================================================

/// Apply Pauli-X to `target`
/// Gantree: x(reg, t) // X 적용
pub fn x(reg: &mut QubitRegister, target: QubitId) -> QaccelResult<()> {
    reg.apply_unitary(&x_matrix(), &[target])
}

/// Apply Hadamard to `target`
/// Gantree: h(reg, t) // H 적용
pub fn h(reg: &mut QubitRegister, target: QubitId) -> QaccelResult<()> {
    reg.apply_unitary(&h_matrix(), &[target])
}

/// Apply Pauli-Z to `target`
pub fn z(reg: &mut QubitRegister, target: QubitId) -> QaccelResult<()> {
    reg.apply_unitary(&z_matrix(), &[target])
}

/// Flip `target` when `control` is |1⟩
/// Gantree: cnot(reg, c, t) // CNOT 적용
pub fn cnot(reg: &mut QubitRegister, control: QubitId, target: QubitId) -> QaccelResult<()> {
    reg.apply_unitary(&cnot_matrix(), &[control, target])
}

/// Exchange `qubit1` and `qubit2`
pub fn swap(reg: &mut QubitRegister, qubit1: QubitId, qubit2: QubitId) -> QaccelResult<()> {
    reg.apply_unitary(&swap_matrix(), &[qubit1, qubit2])
}

/// Apply R_k to `target`
/// Gantree: phase_rk(reg, t, k) // R_k 적용
pub fn phase_rk(reg: &mut QubitRegister, target: QubitId, k: PhaseExponent) -> QaccelResult<()> {
    reg.apply_unitary(&phase_rk_matrix(k), &[target])
}

/// Apply a gate value
/// Gantree: apply_gate(reg, &Gate) // 게이트 디스패치
pub fn apply_gate(reg: &mut QubitRegister, gate: &Gate) -> QaccelResult<()> {
    match *gate {
        Gate::X(q) => x(reg, q),
        Gate::H(q) => h(reg, q),
        Gate::Z(q) => z(reg, q),
        Gate::PhaseRk(q, k) => phase_rk(reg, q, k),
        Gate::Cnot(c, t) => cnot(reg, c, t),
        Gate::Swap(a, b) => swap(reg, a, b),
    }
}

/// Matrix for a gate value (targets in [`Gate::qubits`] order)
pub fn matrix_of(gate: &Gate) -> Unitary {
    match *gate {
        Gate::X(_) => x_matrix(),
        Gate::H(_) => h_matrix(),
        Gate::Z(_) => z_matrix(),
        Gate::PhaseRk(_, k) => phase_rk_matrix(k),
        Gate::Cnot(_, _) => cnot_matrix(),
        Gate::Swap(_, _) => swap_matrix(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qaccel_core::numeric::UNITARY_TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn assert_close(a: &QubitRegister, b: &QubitRegister) {
        for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
            assert_abs_diff_eq!(x.re, y.re, epsilon = 1e-12);
            assert_abs_diff_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    /// Arbitrary non-basis 3-qubit state
    fn scrambled() -> QubitRegister {
        let mut reg = QubitRegister::new(3).unwrap();
        h(&mut reg, 0).unwrap();
        phase_rk(&mut reg, 0, 3).unwrap();
        h(&mut reg, 2).unwrap();
        cnot(&mut reg, 0, 1).unwrap();
        phase_rk(&mut reg, 1, 2).unwrap();
        reg
    }

    #[test]
    fn test_all_matrices_unitary() {
        for u in [
            x_matrix(),
            h_matrix(),
            z_matrix(),
            cnot_matrix(),
            swap_matrix(),
            phase_rk_matrix(3),
            phase_rk_matrix(-4),
        ] {
            assert!(u.is_unitary(UNITARY_TOLERANCE), "{}", u);
        }
    }

    #[test]
    fn test_x_twice_is_exact_identity() {
        for q in 0..3 {
            let before = scrambled();
            let mut reg = before.clone();
            x(&mut reg, q).unwrap();
            x(&mut reg, q).unwrap();
            assert_eq!(reg, before);
        }
    }

    #[test]
    fn test_h_twice_is_identity() {
        for q in 0..3 {
            let before = scrambled();
            let mut reg = before.clone();
            h(&mut reg, q).unwrap();
            h(&mut reg, q).unwrap();
            assert_close(&reg, &before);
        }
    }

    #[test]
    fn test_swap_and_cnot_twice_are_identity() {
        let before = scrambled();

        let mut reg = before.clone();
        swap(&mut reg, 0, 2).unwrap();
        swap(&mut reg, 0, 2).unwrap();
        assert_close(&reg, &before);

        let mut reg = before.clone();
        cnot(&mut reg, 2, 0).unwrap();
        cnot(&mut reg, 2, 0).unwrap();
        assert_close(&reg, &before);
    }

    #[test]
    fn test_bell_pair() {
        let mut reg = QubitRegister::new(2).unwrap();
        h(&mut reg, 0).unwrap();
        cnot(&mut reg, 0, 1).unwrap();

        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(reg.get_amplitude(0).unwrap().re, s, epsilon = 1e-12);
        assert_abs_diff_eq!(reg.get_amplitude(3).unwrap().re, s, epsilon = 1e-12);
        assert_eq!(reg.get_amplitude(1).unwrap(), ZERO);
        assert_eq!(reg.get_amplitude(2).unwrap(), ZERO);
    }

    #[test]
    fn test_cnot_truth_table() {
        // (input index, output index) with control = qubit 0, target = qubit 1
        for (input, output) in [(0, 0), (1, 3), (2, 2), (3, 1)] {
            let mut reg = QubitRegister::new(2).unwrap();
            reg.set_amplitude(0, ZERO).unwrap();
            reg.set_amplitude(input, ONE).unwrap();
            cnot(&mut reg, 0, 1).unwrap();
            assert_eq!(reg.measure_index(), output, "input {}", input);
        }
    }

    #[test]
    fn test_swap_exchanges_qubits() {
        let mut reg = QubitRegister::new(3).unwrap();
        x(&mut reg, 0).unwrap();
        swap(&mut reg, 0, 2).unwrap();
        assert_eq!(reg.measure(), "100");
    }

    #[test]
    fn test_z_flips_phase_of_one() {
        let mut reg = QubitRegister::new(1).unwrap();
        x(&mut reg, 0).unwrap();
        z(&mut reg, 0).unwrap();
        assert_eq!(reg.get_amplitude(1).unwrap(), -ONE);
    }

    #[test]
    fn test_phase_rk_angles() {
        let mut reg = QubitRegister::new(1).unwrap();
        x(&mut reg, 0).unwrap();
        phase_rk(&mut reg, 0, 2).unwrap();
        let amp = reg.get_amplitude(1).unwrap();
        assert_abs_diff_eq!(amp.re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(amp.im, 1.0, epsilon = 1e-12);

        phase_rk(&mut reg, 0, -2).unwrap();
        let amp = reg.get_amplitude(1).unwrap();
        assert_abs_diff_eq!(amp.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(amp.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_gate_dispatch() {
        let mut by_value = QubitRegister::new(3).unwrap();
        let mut by_fn = QubitRegister::new(3).unwrap();

        for gate in [
            Gate::H(0),
            Gate::Cnot(0, 2),
            Gate::PhaseRk(2, 3),
            Gate::Swap(1, 2),
            Gate::Z(0),
            Gate::X(1),
        ] {
            apply_gate(&mut by_value, &gate).unwrap();
            by_fn.apply_unitary(&matrix_of(&gate), &gate.qubits()).unwrap();
        }

        assert_eq!(by_value, by_fn);
    }

    #[test]
    fn test_invalid_target_propagates() {
        let mut reg = QubitRegister::new(2).unwrap();
        assert!(x(&mut reg, 2).is_err());
        assert!(cnot(&mut reg, 1, 1).is_err());
        assert_eq!(reg, QubitRegister::new(2).unwrap());
    }
}
