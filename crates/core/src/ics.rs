//! Initial phase-space distributions.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::{field::PhaseSpace, grid::Mesh1D};

/// Landau-damping profile in the x-rows layout:
///
/// f(x, v) = (1 + ε cos(k x)) · exp(-v²/2) / √(2π),  k = 2π · mode / L.
///
/// With ε = 0 this is a spatially uniform Maxwellian (quiescent plasma).
pub fn landau(x_mesh: &Mesh1D, v_mesh: &Mesh1D, epsilon: f64, mode: usize) -> PhaseSpace {
    let k = 2.0 * PI * mode as f64 / x_mesh.extent();
    let norm = 1.0 / (2.0 * PI).sqrt();

    let x_points = x_mesh.points();
    let v_points = v_mesh.points();

    let mut f = PhaseSpace::zeros(x_mesh.n, v_mesh.n);
    for (i, &x) in x_points.iter().enumerate() {
        let envelope = 1.0 + epsilon * (k * x).cos();
        for (j, &v) in v_points.iter().enumerate() {
            *f.get_mut(i, j) = Complex64::new(envelope * norm * (-0.5 * v * v).exp(), 0.0);
        }
    }
    f
}

/// Spatially uniform Maxwellian, the ε = 0 case of [`landau`].
pub fn maxwellian(x_mesh: &Mesh1D, v_mesh: &Mesh1D) -> PhaseSpace {
    landau(x_mesh, v_mesh, 0.0, 1)
}
