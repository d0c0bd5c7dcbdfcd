//! Qubit register for QACCEL
//!
//! Gantree: L2_Register → QubitRegister
//!
//! Owns the 2^n complex amplitudes of an n-qubit state. Bit i of an
//! amplitude index is the value of qubit i. The register never
//! renormalizes: a non-unitary matrix passed to
//! [`QubitRegister::apply_unitary`] will change the total weight and that
//! drift is kept.

use crate::unitary::Unitary;
use qaccel_core::{register, Amplitude, Bitstring, QaccelError, QaccelResult, QubitId};
use rand::Rng;

const ZERO: Amplitude = Amplitude::new(0.0, 0.0);
const ONE: Amplitude = Amplitude::new(1.0, 0.0);

/// State vector of n qubits
/// Gantree: QubitRegister // 상태 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct QubitRegister {
    /// Number of qubits
    num_qubits: usize,

    /// Amplitudes indexed by basis state (length 2^num_qubits)
    amplitudes: Vec<Amplitude>,
}

impl QubitRegister {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Allocate a register in |0…0⟩
    /// Gantree: new(n) -> Result<Self> // 생성자
    pub fn new(num_qubits: usize) -> QaccelResult<Self> {
        let dim = register::dimension(num_qubits)
            .ok_or(QaccelError::InvalidSize { num_qubits })?;

        let mut amplitudes = vec![ZERO; dim];
        amplitudes[0] = ONE;

        log::debug!("allocated {}-qubit register ({} amplitudes)", num_qubits, dim);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    #[inline]
    pub fn size(&self) -> usize {
        self.num_qubits
    }

    /// Alias for [`size`](Self::size)
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// All amplitudes, indexed by basis state
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`
    /// Gantree: get_amplitude(i) -> Result<Amplitude> // 진폭 읽기
    pub fn get_amplitude(&self, index: usize) -> QaccelResult<Amplitude> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(QaccelError::OutOfRange {
                index,
                dimension: self.amplitudes.len(),
            })
    }

    /// Overwrite the amplitude of basis state `index`
    /// Gantree: set_amplitude(i, v) -> Result // 진폭 쓰기
    pub fn set_amplitude(&mut self, index: usize, value: Amplitude) -> QaccelResult<()> {
        let dimension = self.amplitudes.len();
        let slot = self
            .amplitudes
            .get_mut(index)
            .ok_or(QaccelError::OutOfRange { index, dimension })?;
        *slot = value;
        Ok(())
    }

    // ========================================================================
    // Unitary Application
    // ========================================================================

    /// Apply `matrix` to the ordered `targets`
    ///
    /// `targets[i]` maps to local bit i of the matrix row/column index.
    /// Every source basis state scatters into the 2^k destinations that
    /// differ from it only on the target bits; contributions accumulate in
    /// a fresh vector that replaces the amplitudes once the scan is done.
    ///
    /// All checks run before the amplitudes are touched.
    /// Gantree: apply_unitary(U, targets) -> Result // 유니터리 적용
    pub fn apply_unitary(&mut self, matrix: &Unitary, targets: &[QubitId]) -> QaccelResult<()> {
        let expected = u32::try_from(targets.len())
            .ok()
            .and_then(|k| 1usize.checked_shl(k));
        if expected != Some(matrix.dim()) {
            return Err(QaccelError::DimensionMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: matrix.dim(),
            });
        }
        self.validate_targets(targets)?;

        let masks: Vec<usize> = targets.iter().map(|&q| 1usize << q).collect();
        let target_mask = masks.iter().fold(0usize, |acc, m| acc | m);
        let local_dim = matrix.dim();

        // Destination index for each local row pattern, with non-target bits cleared
        let scatter: Vec<usize> = (0..local_dim)
            .map(|row| {
                masks
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| (row >> i) & 1 == 1)
                    .fold(0usize, |acc, (_, m)| acc | m)
            })
            .collect();

        let mut output = vec![ZERO; self.amplitudes.len()];

        for (state, &amplitude) in self.amplitudes.iter().enumerate() {
            if amplitude == ZERO {
                continue;
            }

            let column = masks
                .iter()
                .enumerate()
                .filter(|&(_, &m)| state & m != 0)
                .fold(0usize, |acc, (i, _)| acc | (1 << i));
            let base = state & !target_mask;

            for (row, &bits) in scatter.iter().enumerate() {
                output[base | bits] += matrix.get(row, column) * amplitude;
            }
        }

        self.amplitudes = output;
        Ok(())
    }

    /// Targets must be in range and pairwise distinct
    fn validate_targets(&self, targets: &[QubitId]) -> QaccelResult<()> {
        for (i, &qubit) in targets.iter().enumerate() {
            if qubit >= self.num_qubits {
                return Err(QaccelError::TargetIndexInvalid {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if targets[..i].contains(&qubit) {
                return Err(QaccelError::DuplicateTarget { qubit });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Squared magnitude of every amplitude
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Σ|a|² over all amplitudes
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Check |Σ|a|² - 1| ≤ tolerance
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_squared() - 1.0).abs() <= tolerance
    }

    /// Index with the largest probability weight, lowest index on ties
    /// Gantree: measure_index() -> usize // 최대 확률 인덱스
    pub fn measure_index(&self) -> usize {
        let mut best = 0;
        let mut best_weight = f64::NEG_INFINITY;
        for (i, amplitude) in self.amplitudes.iter().enumerate() {
            let weight = amplitude.norm_sqr();
            if weight > best_weight {
                best = i;
                best_weight = weight;
            }
        }
        best
    }

    /// Most likely basis state as an n-digit string, MSB first
    ///
    /// Deterministic readout: no sampling, no collapse, amplitudes unchanged.
    /// Gantree: measure() -> String // 결정적 측정
    pub fn measure(&self) -> String {
        self.bitstring_of(self.measure_index()).to_string()
    }

    /// Draw a basis state with probability |a_i|² / Σ|a|² and collapse onto it
    ///
    /// After the call the register holds (1,0) at the drawn index and zero
    /// elsewhere. A register with zero total weight falls back to the
    /// [`measure_index`](Self::measure_index) choice.
    /// Gantree: measure_sampled(rng) -> String // 확률적 측정+붕괴
    pub fn measure_sampled<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let total = self.norm_squared();
        let outcome = if total > 0.0 {
            let r = rng.gen::<f64>() * total;
            let mut cumsum = 0.0;
            let mut outcome = self.amplitudes.len() - 1;
            for (i, amplitude) in self.amplitudes.iter().enumerate() {
                cumsum += amplitude.norm_sqr();
                if r < cumsum {
                    outcome = i;
                    break;
                }
            }
            outcome
        } else {
            self.measure_index()
        };

        self.amplitudes.fill(ZERO);
        self.amplitudes[outcome] = ONE;

        self.bitstring_of(outcome).to_string()
    }

    /// n-bit label of a basis index
    pub fn bitstring_of(&self, index: usize) -> Bitstring {
        Bitstring::from_value(index as u64, self.num_qubits)
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Return to |0…0⟩
    /// Gantree: reset() // 초기화
    pub fn reset(&mut self) {
        self.amplitudes.fill(ZERO);
        self.amplitudes[0] = ONE;
    }
}

// ============================================================================
// Tests
// ============================================================================
