//! Constants for QACCEL
//!
//! Gantree: L0_Foundation → Constants
//!
//! Gate constants, register defaults, and numeric tolerances.

// ============================================================================
// Gate Constants
// Gantree: gates // 게이트 상수
// ============================================================================

pub mod gates {
    //! Fixed values used when building gate matrices

    /// 1/√2, the Hadamard normalization
    /// Gantree: INV_SQRT_2: f64 = 0.7071...
    pub const INV_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    /// Full turn in radians
    /// Gantree: TWO_PI: f64 = 2π
    pub const TWO_PI: f64 = std::f64::consts::TAU;

    /// Rotation angle of R_k: 2π / 2^k (negative k negates the angle)
    #[inline]
    pub fn phase_angle(k: i32) -> f64 {
        let angle = TWO_PI / 2.0_f64.powi(k.saturating_abs());
        if k < 0 {
            -angle
        } else {
            angle
        }
    }
}

// ============================================================================
// Register Constants
// Gantree: register // 레지스터 상수
// ============================================================================

pub mod register {
    //! Register sizing defaults

    /// Register width used by the modular-multiply pipeline
    /// Gantree: DEFAULT_QUBITS: usize = 16
    pub const DEFAULT_QUBITS: usize = 16;

    /// Bytes per amplitude (two f64 components)
    pub const AMPLITUDE_BYTES: usize = 16;

    /// Number of basis states for `num_qubits`, if addressable
    ///
    /// Also rejects sizes whose amplitude buffer would exceed `isize::MAX`
    /// bytes, the allocation limit of `Vec`.
    #[inline]
    pub fn dimension(num_qubits: usize) -> Option<usize> {
        let shift = u32::try_from(num_qubits).ok()?;
        let dim = 1usize.checked_shl(shift)?;
        let bytes = dim.checked_mul(AMPLITUDE_BYTES)?;
        if bytes > isize::MAX as usize {
            return None;
        }
        Some(dim)
    }
}

// ============================================================================
// Numeric Constants
// Gantree: numeric // 수치 상수
// ============================================================================

pub mod numeric {
    //! Floating point tolerances

    /// Default per-component tolerance for amplitude comparisons
    /// Gantree: DEFAULT_TOLERANCE: f64 = 1e-9
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Tolerance for unitarity checks on gate matrices
    pub const UNITARY_TOLERANCE: f64 = 1e-10;
}

// ============================================================================
// Tests
// ============================================================================
