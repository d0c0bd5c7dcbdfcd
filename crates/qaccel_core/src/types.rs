//! Core types for QACCEL
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases shared by the circuit and simulator crates, plus the
//! measured [`Bitstring`].

use crate::error::{QaccelError, QaccelResult};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed, qubit i is bit i of a basis index)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Complex amplitude of one basis state
/// Gantree: Amplitude // pub type Amplitude = Complex64
pub type Amplitude = Complex64;

/// Exponent k of the phase rotation R_k (negative for inverse rotations)
pub type PhaseExponent = i32;

// ============================================================================
// Bitstring
// ============================================================================

/// Measurement outcome, most-significant qubit first
/// Gantree: Bitstring // 비트열 타입
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from string (e.g., "0101")
    /// Gantree: parse(s) -> Self // 파싱
    pub fn parse(s: &str) -> QaccelResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(QaccelError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// N-bit representation of `value mod 2^n`
    pub fn from_value(value: u64, n: usize) -> Self {
        let bits = (0..n)
            .rev()
            .map(|i| i < u64::BITS as usize && (value >> i) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Create zero bitstring of given length
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count number of 1s (Hamming weight)
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Get the bit of qubit `qubit` (qubit 0 is the last character)
    pub fn qubit(&self, qubit: QubitId) -> Option<bool> {
        if qubit >= self.bits.len() {
            return None;
        }
        self.bits.get(self.bits.len() - 1 - qubit).copied()
    }

    /// Integer value, little-endian over qubits
    /// Gantree: to_value() -> Result<u64> // 정수 변환
    pub fn to_value(&self) -> QaccelResult<u64> {
        if self.bits.len() > u64::BITS as usize {
            return Err(QaccelError::InvalidBitstring(self.to_string()));
        }
        Ok(self
            .bits
            .iter()
            .rev()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| 1u64 << i)
            .sum())
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstring {
    type Err = QaccelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
