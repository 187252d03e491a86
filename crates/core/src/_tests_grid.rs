#![cfg(test)]

use std::f64::consts::PI;

use super::advection::build_k_vector;
use super::grid::Mesh1D;

#[test]
fn mesh_samples_exclude_the_endpoint() {
    let mesh = Mesh1D::new(0.0, 4.0, 8);
    let points = mesh.points();

    assert_eq!(points.len(), 8);
    assert_eq!(points[0], 0.0);
    assert!((mesh.step - 0.5).abs() < 1e-15);
    assert!((points[7] - 3.5).abs() < 1e-15, "stop must not be sampled");
}

#[test]
fn mesh_extent_is_the_period() {
    let mesh = Mesh1D::new(-6.0, 6.0, 64);
    assert!((mesh.extent() - 12.0).abs() < 1e-15);
    assert!((mesh.step - 12.0 / 64.0).abs() < 1e-15);
}

#[test]
#[should_panic(expected = "at least one point")]
fn zero_length_mesh_is_rejected() {
    let _ = Mesh1D::new(0.0, 1.0, 0);
}

#[test]
#[should_panic(expected = "extent must be positive")]
fn reversed_bounds_are_rejected() {
    let _ = Mesh1D::new(1.0, 0.0, 4);
}

#[test]
fn k_vector_uses_forward_transform_ordering_even() {
    let k = build_k_vector(4, 1.0);
    let expected = [0.0, 1.0, -2.0, -1.0].map(|m| 2.0 * PI * m);
    for (got, want) in k.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn k_vector_uses_forward_transform_ordering_odd() {
    let k = build_k_vector(5, 2.0);
    let expected = [0.0, 1.0, 2.0, -2.0, -1.0].map(|m| 2.0 * PI * m / 2.0);
    for (got, want) in k.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn k_vector_scales_with_domain_length() {
    let k = build_k_vector(8, 4.0 * PI);
    // Fundamental mode of a 4π-periodic domain is k = 0.5.
    assert!((k[1] - 0.5).abs() < 1e-12);
}
