#![cfg(test)]

use std::f64::consts::PI;

use super::_tests_support::NaiveBackend;
use super::grid::Mesh1D;
use super::ics;
use super::poisson::{compute_density, compute_field};

#[test]
fn density_is_mean_free() {
    let x_mesh = Mesh1D::new(0.0, 4.0 * PI, 16);
    let v_mesh = Mesh1D::new(-6.0, 6.0, 16);
    let f = ics::landau(&x_mesh, &v_mesh, 0.05, 1);

    let density = compute_density(&v_mesh, &f);
    let mean = density.iter().sum::<f64>() / density.len() as f64;

    assert_eq!(density.len(), 16);
    assert!(mean.abs() < 1e-14, "density mean should vanish, got {mean}");
}

#[test]
fn uniform_plasma_has_zero_density() {
    let x_mesh = Mesh1D::new(0.0, 4.0 * PI, 16);
    let v_mesh = Mesh1D::new(-6.0, 6.0, 32);
    let f = ics::maxwellian(&x_mesh, &v_mesh);

    let density = compute_density(&v_mesh, &f);
    for (i, rho) in density.iter().enumerate() {
        assert!(
            rho.abs() < 1e-14,
            "uniform plasma should carry no charge, got {rho} at {i}"
        );
    }
}

#[test]
fn single_mode_density_recovers_analytic_field() {
    // For ρ(x) = cos(2π m x / L), dE/dx = ρ has the periodic solution
    // E(x) = (L / 2π m) sin(2π m x / L).
    let backend = NaiveBackend;
    let nx = 32;
    let length = 4.0 * PI;
    let x_mesh = Mesh1D::new(0.0, length, nx);
    let m = 2.0;

    let density: Vec<f64> = x_mesh
        .points()
        .iter()
        .map(|&x| (2.0 * PI * m * x / length).cos())
        .collect();

    let field = compute_field(&backend, &x_mesh, &density);

    let scale = length / (2.0 * PI * m);
    for (&x, &e) in x_mesh.points().iter().zip(&field) {
        let expected = scale * (2.0 * PI * m * x / length).sin();
        assert!(
            (e - expected).abs() < 1e-10,
            "x={x}: expected {expected}, got {e}"
        );
    }
}

#[test]
fn solved_field_is_mean_free() {
    let backend = NaiveBackend;
    let x_mesh = Mesh1D::new(0.0, 2.0 * PI, 16);

    // Mean-free but multi-mode density.
    let density: Vec<f64> = x_mesh
        .points()
        .iter()
        .map(|&x| x.cos() + 0.3 * (2.0 * x).sin())
        .collect();

    let field = compute_field(&backend, &x_mesh, &density);
    let mean = field.iter().sum::<f64>() / field.len() as f64;
    assert!(mean.abs() < 1e-12, "field mean should vanish, got {mean}");
}

#[test]
#[should_panic(expected = "must match the velocity mesh")]
fn density_rejects_mismatched_buffer() {
    let x_mesh = Mesh1D::new(0.0, 1.0, 8);
    let v_mesh = Mesh1D::new(-1.0, 1.0, 8);
    let f = ics::maxwellian(&x_mesh, &v_mesh);

    let wrong_v = Mesh1D::new(-1.0, 1.0, 16);
    let _ = compute_density(&wrong_v, &f);
}
