//! Quantum Fourier Transform for QACCEL
//!
//! Gantree: L4_Transform → QFT
//!
//! Forward and inverse QFT over a whole register, composed from the gate
//! library. The inverse replays the forward sequence backwards with every
//! phase negated, so `apply_qft` followed by `apply_inverse_qft` is the
//! identity up to rounding. Gate order matters: moving the swap stage
//! changes the output permutation.

use crate::gates;
use crate::register::QubitRegister;
use qaccel_core::{Circuit, CircuitBuilder, QaccelResult};

/// Forward QFT
///
/// Ascending i: H(i), then R_{j-i+1} on each j > i. Qubit order is reversed
/// at the end. The gate sequence is [`CircuitBuilder::qft`].
/// Gantree: apply_qft(reg) // QFT 적용
pub fn apply_qft(reg: &mut QubitRegister) -> QaccelResult<()> {
    let n = reg.size();
    log::debug!("applying QFT to {} qubits", n);
    apply_all(reg, &CircuitBuilder::with_name(n, "qft").qft().build())
}

/// Inverse QFT
///
/// Qubit order is reversed first, then descending i: R_{-(j-i+1)} for
/// descending j > i, then H(i). The gate sequence is
/// [`CircuitBuilder::inverse_qft`].
/// Gantree: apply_inverse_qft(reg) // 역 QFT 적용
pub fn apply_inverse_qft(reg: &mut QubitRegister) -> QaccelResult<()> {
    let n = reg.size();
    log::debug!("applying inverse QFT to {} qubits", n);
    apply_all(reg, &CircuitBuilder::with_name(n, "qft_dg").inverse_qft().build())
}

fn apply_all(reg: &mut QubitRegister, circuit: &Circuit) -> QaccelResult<()> {
    for gate in circuit.gates() {
        gates::apply_gate(reg, gate)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use approx::assert_abs_diff_eq;
    use qaccel_core::Amplitude;

    #[test]
    fn test_round_trip_all_values() {
        for n in 1..=6 {
            for value in 0..(1u64 << n) {
                let mut reg = QubitRegister::new(n).unwrap();
                codec::encode(value, &mut reg).unwrap();
                let before = reg.clone();

                apply_qft(&mut reg).unwrap();
                apply_inverse_qft(&mut reg).unwrap();

                for (a, b) in reg.amplitudes().iter().zip(before.amplitudes()) {
                    assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
                    assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
                }
                assert_eq!(codec::decode(&reg.measure()).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_scenario_four_qubits_value_five() {
        let mut reg = QubitRegister::new(4).unwrap();
        codec::encode(5, &mut reg).unwrap();

        for i in 0..16 {
            let expected = if i == 5 {
                Amplitude::new(1.0, 0.0)
            } else {
                Amplitude::new(0.0, 0.0)
            };
            assert_eq!(reg.get_amplitude(i).unwrap(), expected);
        }

        apply_qft(&mut reg).unwrap();
        apply_inverse_qft(&mut reg).unwrap();

        let bits = reg.measure();
        assert_eq!(bits, "0101");
        assert_eq!(codec::decode(&bits).unwrap(), 5);
    }

    #[test]
    fn test_qft_of_ground_is_uniform() {
        let n = 4;
        let mut reg = QubitRegister::new(n).unwrap();
        apply_qft(&mut reg).unwrap();

        let expected = 1.0 / ((1 << n) as f64).sqrt();
        for amp in reg.amplitudes() {
            assert_abs_diff_eq!(amp.norm(), expected, epsilon = 1e-12);
        }
        assert!(reg.is_normalized(1e-12));
    }

    #[test]
    fn test_qft_preserves_norm() {
        let mut reg = QubitRegister::new(5).unwrap();
        codec::encode(19, &mut reg).unwrap();
        apply_qft(&mut reg).unwrap();
        assert!(reg.is_normalized(1e-12));
    }

    #[test]
    fn test_two_qubit_qft_gate_order() {
        let mut reg = QubitRegister::new(2).unwrap();
        codec::encode(1, &mut reg).unwrap();
        let mut expected = reg.clone();

        apply_qft(&mut reg).unwrap();

        gates::h(&mut expected, 0).unwrap();
        gates::phase_rk(&mut expected, 1, 2).unwrap();
        gates::h(&mut expected, 1).unwrap();
        gates::swap(&mut expected, 0, 1).unwrap();
        assert_eq!(reg, expected);

        gates::swap(&mut expected, 0, 1).unwrap();
        gates::h(&mut expected, 1).unwrap();
        gates::phase_rk(&mut expected, 1, -2).unwrap();
        gates::h(&mut expected, 0).unwrap();
        apply_inverse_qft(&mut reg).unwrap();
        assert_eq!(reg, expected);
    }

    #[test]
    fn test_single_qubit_qft_is_hadamard() {
        let mut reg = QubitRegister::new(1).unwrap();
        apply_qft(&mut reg).unwrap();

        let mut expected = QubitRegister::new(1).unwrap();
        gates::h(&mut expected, 0).unwrap();
        assert_eq!(reg, expected);
    }

    #[test]
    fn test_zero_qubits_is_noop() {
        let mut reg = QubitRegister::new(0).unwrap();
        apply_qft(&mut reg).unwrap();
        apply_inverse_qft(&mut reg).unwrap();
        assert_eq!(reg, QubitRegister::new(0).unwrap());
    }
}
