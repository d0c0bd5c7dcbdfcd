//! Integer codec for QACCEL
//!
//! Gantree: L5_Boundary → IntegerCodec
//!
//! Bit i of an integer is qubit i. Measured strings are MSB first, so
//! decoding reads them right to left.

use crate::gates;
use crate::register::QubitRegister;
use qaccel_core::{Bitstring, QaccelResult};

/// Set qubit i for every set bit i of `value mod 2^n`
///
/// Expects a ground-state register. Encoding on top of another state is
/// not undone or renormalized.
/// Gantree: encode(value, reg) // 정수 인코딩
pub fn encode(value: u64, reg: &mut QubitRegister) -> QaccelResult<()> {
    for i in 0..reg.size().min(u64::BITS as usize) {
        if (value >> i) & 1 == 1 {
            gates::x(reg, i)?;
        }
    }
    Ok(())
}

/// Integer whose bit i is the character at position len-1-i
/// Gantree: decode(bits) -> Result<u64> // 정수 디코딩
pub fn decode(bits: &str) -> QaccelResult<u64> {
    Bitstring::parse(bits)?.to_value()
}

/// n-bit MSB-first string of `value mod 2^n`
pub fn to_bitstring(value: u64, n: usize) -> String {
    Bitstring::from_value(value, n).to_string()
}

// ============================================================================
// Tests
// ============================================================================
