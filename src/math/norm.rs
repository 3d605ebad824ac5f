//! Residuals and their Euclidean norm.

use nalgebra::{DMatrix, DVector};

/// `A x - b`.
///
/// # Panics
/// Panics on mismatched shapes. Callers validate shapes first.
pub fn residual_vector(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> DVector<f64> {
    a * x - b
}

/// `||r||_2`.
pub fn l2_norm(r: &DVector<f64>) -> f64 {
    r.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_norm_of_three_four() {
        let r = DVector::from_row_slice(&[3.0, -4.0]);
        assert!((l2_norm(&r) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn residual_vector_subtracts_target() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 2.0]);
        let x = DVector::from_row_slice(&[1.0, 1.0]);
        let b = DVector::from_row_slice(&[1.0, 1.0]);
        assert_eq!(residual_vector(&a, &x, &b), DVector::from_row_slice(&[1.0, 1.0]));
    }
}
