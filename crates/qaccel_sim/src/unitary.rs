//! Unitary matrices for QACCEL
//!
//! Gantree: L2_Register → Unitary
//!
//! Square, size-checked complex matrices in row-major order. Row and column
//! indices enumerate the target qubits in binary with the first listed
//! target as the least-significant local bit.

use qaccel_core::{Amplitude, QaccelError, QaccelResult};
use std::fmt;
use std::ops::Index;

/// Immutable square matrix applied by `QubitRegister::apply_unitary`
/// Gantree: Unitary // 유니터리 행렬
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    dim: usize,
    data: Vec<Amplitude>,
}

impl Unitary {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build from rows; every row must have `rows.len()` entries
    /// Gantree: from_rows(rows) -> Result<Self> // 행 기반 생성
    pub fn from_rows(rows: Vec<Vec<Amplitude>>) -> QaccelResult<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(QaccelError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { dim, data })
    }

    /// Build from real-valued rows
    pub fn from_real_rows(rows: &[&[f64]]) -> QaccelResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&re| Amplitude::new(re, 0.0)).collect())
                .collect(),
        )
    }

    /// Identity of dimension `dim`
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![Amplitude::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = Amplitude::new(1.0, 0.0);
        }
        Self { dim, data }
    }

    /// Diagonal matrix
    pub fn diagonal(entries: &[Amplitude]) -> Self {
        let mut unitary = Self::identity(entries.len());
        for (i, &entry) in entries.iter().enumerate() {
            unitary.data[i * unitary.dim + i] = entry;
        }
        unitary
    }

    /// Overwrite (row, col, value) entries; indices must be < dim
    pub(crate) fn with_entries(mut self, entries: &[(usize, usize, Amplitude)]) -> Self {
        for &(row, col, value) in entries {
            self.data[row * self.dim + col] = value;
        }
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Matrix dimension (rows == columns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of target qubits this matrix acts on, if `dim` is a power of two
    pub fn num_targets(&self) -> Option<usize> {
        if self.dim.is_power_of_two() {
            Some(self.dim.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Amplitude {
        self.data[row * self.dim + col]
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in 0..self.dim {
            for col in 0..self.dim {
                data.push(self.get(col, row).conj());
            }
        }
        Self {
            dim: self.dim,
            data,
        }
    }

    /// Check U·U† = I within `tolerance` per entry
    ///
    /// Never called by the register; unitarity is the caller's contract.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        for i in 0..self.dim {
            for j in 0..self.dim {
                let mut sum = Amplitude::new(0.0, 0.0);
                for k in 0..self.dim {
                    sum += self.get(i, k) * self.get(j, k).conj();
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                if (sum - Amplitude::new(expected, 0.0)).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl Index<(usize, usize)> for Unitary {
    type Output = Amplitude;

    fn index(&self, (row, col): (usize, usize)) -> &Amplitude {
        &self.data[row * self.dim + col]
    }
}

impl fmt::Display for Unitary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            let entries: Vec<String> = (0..self.dim)
                .map(|col| {
                    let c = self.get(row, col);
                    format!("{:+.4}{:+.4}i", c.re, c.im)
                })
                .collect();
            writeln!(f, "[{}]", entries.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
