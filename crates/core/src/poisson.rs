//! Charge density and spectral field solve.
//!
//! The longitudinal electric field follows from Gauss's law dE/dx = ρ on the
//! periodic domain: each non-zero Fourier mode divides by ik, and the zero
//! mode carries no physical content (the average field is gauge-free) so it
//! is forced to exactly zero rather than derived from the mean charge.

use num_complex::Complex64;

use crate::{
    advection::build_k_vector,
    backend::{SpectralBackend, SpectralBuffer},
    grid::Mesh1D,
};

/// Velocity-integrated charge density on the spatial mesh, mean-subtracted.
///
/// `f` must be in the x-rows layout (one contiguous row of velocity samples
/// per spatial point). Only the real part of the distribution contributes;
/// the imaginary part is numerical residue of the spectral operations.
/// The returned density always has zero arithmetic mean.
pub fn compute_density<F: SpectralBuffer>(v_mesh: &Mesh1D, f: &F) -> Vec<f64> {
    assert_eq!(f.cols(), v_mesh.n, "buffer rows must match the velocity mesh");

    let nv = v_mesh.n;
    let mut density: Vec<f64> = f
        .as_slice()
        .chunks_exact(nv)
        .map(|row| row.iter().map(|c| c.re).sum::<f64>() * v_mesh.step)
        .collect();

    let mean = density.iter().sum::<f64>() / density.len() as f64;
    for value in &mut density {
        *value -= mean;
    }
    density
}

/// Solve dE/dx = ρ spectrally for a mean-free periodic density.
pub fn compute_field<B: SpectralBackend>(
    backend: &B,
    x_mesh: &Mesh1D,
    density: &[f64],
) -> Vec<f64> {
    assert_eq!(
        density.len(),
        x_mesh.n,
        "density length must match the spatial mesh"
    );

    let wavenumbers = build_k_vector(x_mesh.n, x_mesh.extent());
    let mut spectrum: Vec<Complex64> = density
        .iter()
        .map(|&rho| Complex64::new(rho, 0.0))
        .collect();
    backend.forward_fft(&mut spectrum);

    spectrum[0] = Complex64::ZERO;
    for (value, &k) in spectrum.iter_mut().zip(&wavenumbers).skip(1) {
        *value *= Complex64::new(0.0, -1.0) / k;
    }

    backend.inverse_fft(&mut spectrum);
    spectrum.iter().map(|c| c.re).collect()
}
