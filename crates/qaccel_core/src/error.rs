//! Error types for QACCEL
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every variant is a local precondition violation, detected before any
//! amplitude is touched.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QACCEL
/// Gantree: QaccelError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QaccelError {
    // ========================================================================
    // Register Errors
    // ========================================================================
    /// Qubit count whose state vector cannot be addressed
    /// Gantree: InvalidSize{{n}} // 2^n overflow
    #[error("Invalid register size: 2^{num_qubits} amplitudes cannot be allocated")]
    InvalidSize { num_qubits: usize },

    /// Amplitude index outside [0, 2^n)
    /// Gantree: OutOfRange{{index,dim}} // 인덱스 범위
    #[error("Amplitude index {index} out of range: dimension is {dimension}")]
    OutOfRange { index: usize, dimension: usize },

    /// Unitary dimension does not match 2^|targets|
    /// Gantree: DimensionMismatch{{expected,actual}} // 행렬 차원
    #[error("Dimension mismatch: expected {expected}x{expected} matrix, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Target qubit outside the register
    /// Gantree: TargetIndexInvalid{{q,n}} // 타겟 범위
    #[error("Target qubit {qubit} invalid: register has {num_qubits} qubits")]
    TargetIndexInvalid { qubit: usize, num_qubits: usize },

    /// Same qubit listed twice in one target list
    #[error("Target qubit {qubit} listed more than once")]
    DuplicateTarget { qubit: usize },

    /// Circuit is wider than the register it is applied to
    #[error("Register too narrow: circuit needs {required} qubits, register has {available}")]
    RegisterTooNarrow { required: usize, available: usize },

    // ========================================================================
    // Codec Errors
    // ========================================================================
    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain at most 64 '0'/'1' characters")]
    InvalidBitstring(String),

    /// Zero modulus passed to modular arithmetic
    #[error("Invalid modulus {0}: must be positive")]
    InvalidModulus(u64),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Simulator configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QACCEL operations
/// Gantree: QaccelResult<T> // type alias
pub type QaccelResult<T> = Result<T, QaccelError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QaccelError {
    fn from(err: serde_json::Error) -> Self {
        QaccelError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QaccelError {
    /// Check if error concerns a target qubit list
    pub fn is_target_error(&self) -> bool {
        matches!(
            self,
            QaccelError::TargetIndexInvalid { .. } | QaccelError::DuplicateTarget { .. }
        )
    }

    /// Check if error is a register precondition violation
    pub fn is_register_error(&self) -> bool {
        matches!(
            self,
            QaccelError::InvalidSize { .. }
                | QaccelError::OutOfRange { .. }
                | QaccelError::DimensionMismatch { .. }
                | QaccelError::RegisterTooNarrow { .. }
        ) || self.is_target_error()
    }

    /// Check if error is a validation error on caller-supplied values
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QaccelError::InvalidBitstring(_)
                | QaccelError::InvalidModulus(_)
                | QaccelError::InvalidConfig(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QaccelError::OutOfRange {
            index: 16,
            dimension: 8,
        };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("8"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = QaccelError::DimensionMismatch {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected 4x4 matrix, got 2"
        );
    }

    #[test]
    fn test_is_target_error() {
        assert!(QaccelError::DuplicateTarget { qubit: 1 }.is_target_error());
        assert!(QaccelError::TargetIndexInvalid {
            qubit: 5,
            num_qubits: 3
        }
        .is_target_error());
        assert!(!QaccelError::InvalidModulus(0).is_target_error());
    }

    #[test]
    fn test_is_register_error() {
        assert!(QaccelError::InvalidSize { num_qubits: 64 }.is_register_error());
        assert!(QaccelError::DuplicateTarget { qubit: 0 }.is_register_error());
        let narrow = QaccelError::RegisterTooNarrow {
            required: 5,
            available: 3,
        };
        assert!(narrow.is_register_error());
        assert!(!narrow.is_target_error());
        assert_eq!(
            narrow.to_string(),
            "Register too narrow: circuit needs 5 qubits, register has 3"
        );
        assert!(!QaccelError::InvalidConfig("x".into()).is_register_error());
    }

    #[test]
    fn test_json_conversion() {
        let err: QaccelError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, QaccelError::JsonError(_)));
    }
}
