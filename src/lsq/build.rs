//! Synthetic overdetermined system builder.
//!
//! For `m` rows and `n` columns:
//!
//! - `t` is `m` evenly spaced samples over `[0, 1]` (`t = [0]` when `m = 1`)
//! - `A[i, j] = t_i^j` (Vandermonde, increasing powers)
//! - `b_i = cos(s · t_i)` with `s` from [`BuildConfig::cos_scale`]
//!
//! Output depends only on the arguments; there is no randomness.

use nalgebra::DVector;

use crate::domain::{BuildConfig, System};
use crate::error::InputError;
use crate::lsq::validate::{allocatable, finite_parameter, positive_dimension};
use crate::math::{linspace, vander};

/// Build `(A, b)` with the default cosine scaling.
///
/// Returns `None` if either dimension is zero or negative, or if the matrix
/// would be too large to allocate.
pub fn build_system(rows: i64, columns: i64) -> Option<System> {
    try_build_system(rows, columns).ok()
}

/// Build `(A, b)` with an explicit configuration.
pub fn build_system_with(rows: i64, columns: i64, config: &BuildConfig) -> Option<System> {
    try_build_system_with(rows, columns, config).ok()
}

/// [`build_system`], reporting why the input was rejected.
pub fn try_build_system(rows: i64, columns: i64) -> Result<System, InputError> {
    try_build_system_with(rows, columns, &BuildConfig::default())
}

/// [`build_system_with`], reporting why the input was rejected.
pub fn try_build_system_with(
    rows: i64,
    columns: i64,
    config: &BuildConfig,
) -> Result<System, InputError> {
    let m = positive_dimension("rows", rows)?;
    let n = positive_dimension("columns", columns)?;
    allocatable(m, n)?;
    let scale = finite_parameter("cos_scale", config.cos_scale)?;

    let t = linspace(0.0, 1.0, m);
    let a = vander(&t, n);
    let b = DVector::from_iterator(m, t.iter().map(|&ti| (scale * ti).cos()));
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNSCALED_COS;
    use crate::error::InputErrorKind;

    #[test]
    fn shapes_follow_arguments() {
        for (m, n) in [(1, 1), (1, 4), (5, 2), (7, 7), (20, 3)] {
            let (a, b) = build_system(m, n).unwrap();
            assert_eq!(a.shape(), (m as usize, n as usize));
            assert_eq!(b.len(), m as usize);
        }
    }

    #[test]
    fn single_row_samples_zero() {
        let (a, b) = build_system(1, 1).unwrap();
        assert_eq!(a.as_slice(), &[1.0]);
        assert_eq!(b.as_slice(), &[1.0]);

        let (a, _) = build_system(1, 3).unwrap();
        assert_eq!(a.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn three_by_three_values() {
        // t = [0, 0.5, 1]
        let (a, b) = build_system(3, 3).unwrap();
        let expected: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [1.0, 0.5, 0.25], [1.0, 1.0, 1.0]];
        for (i, row) in expected.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert_eq!(a[(i, j)], v, "A[({i},{j})]");
            }
        }
        let expected_b = [1.0, 2.0_f64.cos(), 4.0_f64.cos()];
        for (got, want) in b.iter().zip(expected_b) {
            assert!((got - want).abs() < 1e-15, "b: expected {want}, got {got}");
        }
    }

    #[test]
    fn unscaled_variant_uses_plain_cosine() {
        let config = BuildConfig {
            cos_scale: UNSCALED_COS,
        };
        let (a_scaled, _) = build_system(4, 2).unwrap();
        let (a, b) = build_system_with(4, 2, &config).unwrap();
        assert_eq!(a, a_scaled);
        for (i, &ti) in [0.0_f64, 1.0 / 3.0, 2.0 / 3.0, 1.0].iter().enumerate() {
            let want = ti.cos();
            assert!((b[i] - want).abs() < 1e-15, "b[{i}]: expected {want}, got {}", b[i]);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = build_system(11, 4).unwrap();
        let second = build_system(11, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_positive_dimensions_are_invalid() {
        for (m, n) in [(0, 1), (1, 0), (-3, 2), (2, -1), (0, 0)] {
            assert!(build_system(m, n).is_none(), "({m}, {n}) should be invalid");
        }
        let err = try_build_system(0, 2).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::NonPositiveDimension);
    }

    #[test]
    fn oversized_dimensions_are_invalid() {
        assert!(build_system(1, i64::MAX).is_none());
        assert!(build_system(i64::MAX, 1).is_none());
        assert!(build_system(1 << 32, 1 << 32).is_none());

        let err = try_build_system(1, i64::MAX).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::DimensionTooLarge);
    }

    #[test]
    fn non_finite_scale_is_invalid() {
        let config = BuildConfig {
            cos_scale: f64::NAN,
        };
        assert!(build_system_with(3, 2, &config).is_none());
    }
}
