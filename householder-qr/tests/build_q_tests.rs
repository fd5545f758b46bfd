//! Properties of the reconstructed unitary factor Q

mod common;

use approx::assert_abs_diff_eq;
use common::{max_abs_diff, random_matrix};
use householder_qr::*;

#[test]
fn test_q_is_unitary() {
    for &(m, n) in &[(1, 1), (3, 2), (6, 6), (12, 5), (20, 1)] {
        let a = random_matrix(m, n, 100 + m as u64);
        let (w, _) = factorize(&a).unwrap();
        let q = build_q(&w);
        assert_eq!(*q.shape(), (m, m));
        let err = unitarity_error(&q);
        assert!(err < 1e-13, "{}x{}: unitarity error {:e}", m, n, err);
    }
}

#[test]
fn test_q_times_q_adjoint_is_identity() {
    let a = random_matrix(7, 3, 5);
    let (w, _) = factorize(&a).unwrap();
    let q = build_q(&w);
    let qqh = matmul(&q, &adjoint(&q)).unwrap();
    assert!(max_abs_diff(&qqh, &identity(7)) < 1e-13);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let a = random_matrix(15, 9, 77);
    let (w, _) = factorize(&a).unwrap();
    let q_par = build_q_with_config(&w, &QrConfig::default());
    let q_seq = build_q_with_config(&w, &QrConfig::sequential());
    assert_eq!(max_abs_diff(&q_par, &q_seq), 0.0);
}

#[test]
fn test_first_column_reproduces_input() {
    // Q e_0 = H_0 H_1 e_0 = H_0 e_0, and Q[:, 0] * R[0,0] is column 0 of A
    let a = random_matrix(4, 2, 9);
    let (w, r) = factorize(&a).unwrap();
    let q = build_q(&w);
    for i in 0..4 {
        let lhs = q[[i, 0]] * r[[0, 0]];
        assert_abs_diff_eq!(lhs.re, a[[i, 0]].re, epsilon = 1e-13);
        assert_abs_diff_eq!(lhs.im, a[[i, 0]].im, epsilon = 1e-13);
    }
}

#[test]
fn test_degenerate_reflector_acts_as_identity() {
    // Hand-built W: column 0 is degenerate, column 1 is e_1
    let w = CMatrix::from_fn([3, 2], |idx| {
        if idx[0] == 1 && idx[1] == 1 {
            Complex::new(1.0, 0.0)
        } else {
            Complex::new(0.0, 0.0)
        }
    });
    let w = Reflectors::from_matrix(w, 1e-12).unwrap();
    assert!(w.is_degenerate(0));

    let q = build_q(&w);
    // Only H_1 = I - 2 e_1 e_1^H is applied
    let expected = CMatrix::from_fn([3, 3], |idx| {
        if idx[0] != idx[1] {
            Complex::new(0.0, 0.0)
        } else if idx[0] == 1 {
            Complex::new(-1.0, 0.0)
        } else {
            Complex::new(1.0, 0.0)
        }
    });
    assert_eq!(max_abs_diff(&q, &expected), 0.0);
    for i in 0..3 {
        for j in 0..3 {
            assert!(q[[i, j]].re.is_finite() && q[[i, j]].im.is_finite());
        }
    }
}

#[test]
fn test_degenerate_factorization_still_unitary() {
    let a = CMatrix::from_fn([5, 3], |idx| match idx[1] {
        0 => Complex::new(0.0, 0.0),
        1 => Complex::new(idx[0] as f64, 1.0),
        _ => Complex::new(1.0, -(idx[0] as f64)),
    });
    let (w, r) = factorize(&a).unwrap();
    assert!(w.is_degenerate(0));

    let q = build_q(&w);
    assert!(unitarity_error(&q) < 1e-13);
    assert!(reconstruction_error(&a, &q, &r).unwrap() < 1e-13);
}

#[test]
fn test_validated_reflectors_reject_garbage() {
    let w = CMatrix::from_fn([3, 2], |_| Complex::new(1.0, 0.0));
    let result = Reflectors::try_from(w);
    assert!(matches!(result, Err(QrError::InvalidReflector { .. })));
}
