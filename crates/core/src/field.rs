//! Contiguous complex-valued storage for the phase-space distribution.
//!
//! The distribution f(x, v) is stored row-major with one contiguous row per
//! outer-axis point, so a 1D spectral transform along the inner axis acts on
//! contiguous memory. The stepping loop keeps two layouts alive:
//!
//! - x-rows: shape (nx, nv), row i holds f(x_i, ·) — used for v-advection,
//! - v-rows: shape (nv, nx), row j holds f(·, v_j) — used for x-advection.
//!
//! The two layouts must be exact transposes of one another at every
//! synchronization point; [`transpose_into`] is the only operation that
//! moves data between them.

use num_complex::Complex64;

#[derive(Debug, Clone)]
pub struct PhaseSpace {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl PhaseSpace {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "phase space must be non-empty");
        Self {
            rows,
            cols,
            data: vec![Complex64::ZERO; rows * cols],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<Complex64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length must match rows * cols"
        );
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[self.idx(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Complex64 {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }
}

/// Write the transpose of `src` into `dst`.
///
/// `dst` must already have the swapped shape; nothing is allocated. This is
/// the synchronization primitive between the x-rows and v-rows layouts.
pub fn transpose_into(src: &PhaseSpace, dst: &mut PhaseSpace) {
    assert_eq!(src.rows(), dst.cols(), "transpose shape mismatch");
    assert_eq!(src.cols(), dst.rows(), "transpose shape mismatch");
    let (rows, cols) = (src.rows(), src.cols());
    let out = dst.as_mut_slice();
    for r in 0..rows {
        for (c, &value) in src.row(r).iter().enumerate() {
            out[c * rows + r] = value;
        }
    }
}

impl From<PhaseSpace> for Vec<Complex64> {
    fn from(field: PhaseSpace) -> Self {
        field.data
    }
}
