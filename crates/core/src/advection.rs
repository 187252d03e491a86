//! Spectral advection operators.
//!
//! Linear transport on a periodic domain is solved exactly by a phase shift
//! in Fourier space: Fourier modes are eigenfunctions of translation, so
//! advecting by `drift * dt` multiplies mode k by `exp(-i * dt * k * drift)`.
//! The x-direction operator additionally rebuilds the self-consistent
//! electric field from the already-transformed distribution, exploiting
//! linearity of the transform to avoid a second forward pass.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::{
    backend::{SpectralBackend, SpectralBuffer},
    grid::Mesh1D,
};

/// Discrete angular wavenumbers for an `n`-point mesh of the given length,
/// in forward-transform frequency order: k = 0, positive wavenumbers up to
/// just under Nyquist, then negative wavenumbers down to -2π/length.
pub fn build_k_vector(n: usize, length: f64) -> Vec<f64> {
    let two_pi = 2.0 * PI;
    (0..n)
        .map(|i| {
            let centered = if i < (n + 1) / 2 {
                i as isize
            } else {
                i as isize - n as isize
            };
            two_pi * centered as f64 / length
        })
        .collect()
}

/// Free-streaming advection along one mesh axis, with the wavenumber vector
/// precomputed at construction.
pub struct SpectralAdvector {
    mesh: Mesh1D,
    wavenumbers: Vec<f64>,
}

impl SpectralAdvector {
    pub fn new(mesh: Mesh1D) -> Self {
        let wavenumbers = build_k_vector(mesh.n, mesh.extent());
        Self { mesh, wavenumbers }
    }

    pub fn mesh(&self) -> Mesh1D {
        self.mesh
    }

    pub fn wavenumbers(&self) -> &[f64] {
        &self.wavenumbers
    }

    /// Advance the distribution along this advector's axis by `dt` at the
    /// per-row transport speed `drift[row]` (the orthogonal-axis coordinate,
    /// held fixed across the row).
    ///
    /// Solves ∂f/∂t + drift · ∂f/∂axis = 0 exactly on the periodic domain.
    /// The buffer's rows must lie along this advector's axis; the update is
    /// in place.
    pub fn transport_half_step<B: SpectralBackend>(
        &self,
        backend: &B,
        f: &mut B::Buffer,
        drift: &[f64],
        dt: f64,
    ) {
        assert_eq!(f.cols(), self.mesh.n, "buffer rows must match the mesh");
        assert_eq!(drift.len(), f.rows(), "one drift value per row required");

        backend.forward_fft_rows(f);
        let cols = f.cols();
        for (row, &speed) in f.as_mut_slice().chunks_exact_mut(cols).zip(drift) {
            for (value, &k) in row.iter_mut().zip(&self.wavenumbers) {
                *value *= Complex64::from_polar(1.0, -dt * k * speed);
            }
        }
        backend.inverse_fft_rows(f);
    }

    /// The x-direction step of the splitting: transport each row of `f`
    /// (one row per velocity sample) along x at its own velocity for a full
    /// `dt`, then recompute the electric field from the post-advection
    /// density and superpose the external drive.
    ///
    /// The density spectrum is accumulated from the already-transformed
    /// rows (velocity sum scaled by `v_mesh.step`), so no second forward
    /// transform is needed. Mode 0 of the field is forced to exactly zero;
    /// the spatial mean of the self-consistent field therefore vanishes and
    /// any residual imaginary parts are discarded.
    pub fn advect_and_update_field<B: SpectralBackend>(
        &self,
        backend: &B,
        f: &mut B::Buffer,
        field: &mut [f64],
        v_mesh: &Mesh1D,
        dt: f64,
        external: &[Complex64],
    ) {
        assert_eq!(f.cols(), self.mesh.n, "buffer rows must match the x mesh");
        assert_eq!(f.rows(), v_mesh.n, "one row per velocity sample required");
        assert_eq!(field.len(), self.mesh.n, "field length must match the x mesh");
        assert_eq!(
            external.len(),
            self.mesh.n,
            "external field length must match the x mesh"
        );

        let nx = self.mesh.n;
        let dv = v_mesh.step;
        let velocities = v_mesh.points();

        backend.forward_fft_rows(f);

        // Phase-shift each row and fold it into the density spectrum.
        let mut rho_hat = vec![Complex64::ZERO; nx];
        for (row, &v) in f.as_mut_slice().chunks_exact_mut(nx).zip(&velocities) {
            for ((value, &k), rho) in row.iter_mut().zip(&self.wavenumbers).zip(&mut rho_hat) {
                *value *= Complex64::from_polar(1.0, -dt * k * v);
                *rho += *value * dv;
            }
        }

        // Gauss's law mode by mode: Ê_k = -i ρ̂_k / k, zero mode forced to 0.
        let mut e_hat = vec![Complex64::ZERO; nx];
        for i in 1..nx {
            e_hat[i] = Complex64::new(0.0, -1.0) * rho_hat[i] / self.wavenumbers[i];
        }

        backend.inverse_fft_rows(f);
        backend.inverse_fft(&mut e_hat);

        for ((out, e), ext) in field.iter_mut().zip(&e_hat).zip(external) {
            *out = e.re + ext.re;
        }
    }
}
