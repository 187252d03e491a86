#![cfg(test)]

use num_complex::Complex64;

use super::field::{transpose_into, PhaseSpace};

fn ramp(rows: usize, cols: usize) -> PhaseSpace {
    let data = (0..rows * cols)
        .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
        .collect();
    PhaseSpace::from_vec(rows, cols, data)
}

#[test]
fn zeros_allocates_the_requested_shape() {
    let f = PhaseSpace::zeros(3, 5);
    assert_eq!(f.rows(), 3);
    assert_eq!(f.cols(), 5);
    assert_eq!(f.len(), 15);
    assert!(f.as_slice().iter().all(|&v| v == Complex64::ZERO));
}

#[test]
#[should_panic(expected = "data length must match")]
fn from_vec_rejects_mismatched_length() {
    let _ = PhaseSpace::from_vec(2, 3, vec![Complex64::ZERO; 5]);
}

#[test]
fn rows_are_contiguous() {
    let f = ramp(2, 4);
    assert_eq!(f.row(1)[0], Complex64::new(4.0, -2.0));
    assert_eq!(f.get(1, 3), Complex64::new(7.0, -3.5));
}

#[test]
fn transpose_swaps_indices() {
    let src = ramp(2, 3);
    let mut dst = PhaseSpace::zeros(3, 2);
    transpose_into(&src, &mut dst);

    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(src.get(r, c), dst.get(c, r));
        }
    }
}

#[test]
fn double_transpose_is_identity() {
    let src = ramp(4, 6);
    let mut once = PhaseSpace::zeros(6, 4);
    let mut twice = PhaseSpace::zeros(4, 6);
    transpose_into(&src, &mut once);
    transpose_into(&once, &mut twice);

    assert_eq!(src.as_slice(), twice.as_slice());
}

#[test]
#[should_panic(expected = "transpose shape mismatch")]
fn transpose_rejects_wrong_destination_shape() {
    let src = ramp(2, 3);
    let mut dst = PhaseSpace::zeros(2, 3);
    transpose_into(&src, &mut dst);
}
