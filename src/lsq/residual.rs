//! Residual evaluation for a candidate solution.

use nalgebra::{DMatrix, DVector};

use crate::error::InputError;
use crate::lsq::validate::matching_length;
use crate::math::{l2_norm, residual_vector};

fn check_shapes(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> Result<(), InputError> {
    matching_length("x", x, a.ncols(), "columns")?;
    matching_length("b", b, a.nrows(), "rows")
}

/// `||A x - b||_2`, or `None` if `x.len() != A.ncols()` or `b.len() != A.nrows()`.
pub fn residual_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> Option<f64> {
    try_residual_norm(a, x, b).ok()
}

/// [`residual_norm`], reporting why the input was rejected.
pub fn try_residual_norm(
    a: &DMatrix<f64>,
    x: &DVector<f64>,
    b: &DVector<f64>,
) -> Result<f64, InputError> {
    try_residual(a, x, b).map(|r| l2_norm(&r))
}

/// The residual vector `A x - b` itself, validated like [`residual_norm`].
pub fn residual(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    try_residual(a, x, b).ok()
}

/// [`residual`], reporting why the input was rejected.
pub fn try_residual(
    a: &DMatrix<f64>,
    x: &DVector<f64>,
    b: &DVector<f64>,
) -> Result<DVector<f64>, InputError> {
    check_shapes(a, x, b)?;
    Ok(residual_vector(a, x, b))
}
