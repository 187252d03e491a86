//! CPU spectral backend built on rustfft.
//!
//! Row transforms are batched with rayon: every contiguous row of the
//! buffer is independent, so the per-row FFTs run in parallel and join
//! before the caller continues. Plans are cached inside the shared
//! planner and reused across steps.

use std::sync::{Arc, Mutex};

use num_complex::Complex64;
use rayon::prelude::*;
use rustfft::{Fft, FftDirection, FftPlanner};
use vlasov1d_core::backend::SpectralBackend;
use vlasov1d_core::field::PhaseSpace;

pub struct CpuBackend {
    planner: Mutex<FftPlanner<f64>>,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            planner: Mutex::new(FftPlanner::new()),
        }
    }

    fn plan(&self, len: usize, direction: FftDirection) -> Arc<dyn Fft<f64>> {
        self.planner
            .lock()
            .expect("fft planner poisoned")
            .plan_fft(len, direction)
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralBackend for CpuBackend {
    type Buffer = PhaseSpace;

    fn alloc_field(&self, rows: usize, cols: usize) -> Self::Buffer {
        PhaseSpace::zeros(rows, cols)
    }

    fn forward_fft_rows(&self, buffer: &mut Self::Buffer) {
        let cols = buffer.cols();
        let fft = self.plan(cols, FftDirection::Forward);
        buffer
            .as_mut_slice()
            .par_chunks_exact_mut(cols)
            .for_each(|row| fft.process(row));
    }

    fn inverse_fft_rows(&self, buffer: &mut Self::Buffer) {
        let cols = buffer.cols();
        let scale = 1.0 / cols as f64;
        let fft = self.plan(cols, FftDirection::Inverse);
        buffer
            .as_mut_slice()
            .par_chunks_exact_mut(cols)
            .for_each(|row| {
                fft.process(row);
                for value in row.iter_mut() {
                    *value *= scale;
                }
            });
    }

    fn forward_fft(&self, data: &mut [Complex64]) {
        let fft = self.plan(data.len(), FftDirection::Forward);
        fft.process(data);
    }

    fn inverse_fft(&self, data: &mut [Complex64]) {
        let scale = 1.0 / data.len() as f64;
        let fft = self.plan(data.len(), FftDirection::Inverse);
        fft.process(data);
        for value in data.iter_mut() {
            *value *= scale;
        }
    }
}
