//! Transpose products for the normal equations.
//!
//! ```text
//! minimize ||A x - b||^2   <=>   (A^T A) x = A^T b
//! ```
//!
//! Both products go through nalgebra's `tr_mul`, which forms `A^T A` without
//! materialising the transpose. Entry `(i, j)` is the dot product of columns
//! `i` and `j`, so the result is symmetric bit for bit.

use nalgebra::{DMatrix, DVector};

/// `A^T A`, shape `(n, n)` for `A` of shape `(m, n)`.
pub fn normal_matrix(a: &DMatrix<f64>) -> DMatrix<f64> {
    a.tr_mul(a)
}

/// `A^T b`, length `n` for `A` of shape `(m, n)`.
///
/// # Panics
/// Panics if `b.len() != a.nrows()`. Callers validate shapes first.
pub fn normal_rhs(a: &DMatrix<f64>, b: &DVector<f64>) -> DVector<f64> {
    a.tr_mul(b)
}
