//! Rectangular-to-square reduction via the normal equations.
//!
//! A tall system `A x ≈ b` with `A` of shape `(m, n)` becomes the square
//! system `(A^T A) x = A^T b` of shape `(n, n)`. Any solution of the square
//! system minimises `||A x - b||_2`. Conditioning is left to the caller.

use nalgebra::{DMatrix, DVector};

use crate::domain::System;
use crate::error::InputError;
use crate::lsq::validate::{matching_length, non_empty};
use crate::math::{normal_matrix, normal_rhs};

/// Returns `(A^T A, A^T b)`, or `None` if `A` is empty or `b.len() != A.nrows()`.
pub fn reduce_to_square(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<System> {
    try_reduce_to_square(a, b).ok()
}

/// [`reduce_to_square`], reporting why the input was rejected.
pub fn try_reduce_to_square(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<System, InputError> {
    non_empty(a)?;
    matching_length("b", b, a.nrows(), "rows")?;

    Ok((normal_matrix(a), normal_rhs(a, b)))
}
