//! Backend traits for spectral operations.
//!
//! All transforms are 1D and act along the contiguous (inner) axis of a
//! row-major buffer, one row at a time. The forward transform is
//! unnormalized; the inverse carries the 1/N factor, so a forward/inverse
//! pair is the identity. The advection and field-solve operators only
//! depend on this contract, never on a concrete FFT library.

use num_complex::Complex64;

use crate::field::PhaseSpace;

pub trait SpectralBuffer {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn as_slice(&self) -> &[Complex64];
    fn as_mut_slice(&mut self) -> &mut [Complex64];
}

impl SpectralBuffer for PhaseSpace {
    fn rows(&self) -> usize {
        self.rows()
    }

    fn cols(&self) -> usize {
        self.cols()
    }

    fn as_slice(&self) -> &[Complex64] {
        self.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [Complex64] {
        self.as_mut_slice()
    }
}

pub trait SpectralBackend {
    type Buffer: SpectralBuffer + Clone;

    fn alloc_field(&self, rows: usize, cols: usize) -> Self::Buffer;

    /// Unnormalized forward transform of every contiguous row.
    fn forward_fft_rows(&self, buffer: &mut Self::Buffer);

    /// Inverse transform of every contiguous row, scaled by 1/cols.
    fn inverse_fft_rows(&self, buffer: &mut Self::Buffer);

    /// Unnormalized forward transform of a single 1D signal.
    fn forward_fft(&self, data: &mut [Complex64]);

    /// Inverse transform of a single 1D signal, scaled by 1/len.
    fn inverse_fft(&self, data: &mut [Complex64]);
}
