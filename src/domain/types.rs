//! Shared domain types.
//!
//! Kept deliberately small: the operations work directly on nalgebra's
//! dynamically sized matrices and vectors, so this module only names them and
//! carries the builder configuration.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Default cosine scaling for the synthetic target: `b_i = cos(4 · t_i)`.
pub const COS_SCALE: f64 = 4.0;

/// Unscaled cosine target: `b_i = cos(t_i)`.
pub const UNSCALED_COS: f64 = 1.0;

/// A linear system `A x ≈ b` as `(A, b)`.
pub type System = (DMatrix<f64>, DVector<f64>);

/// Options for the synthetic system builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Factor applied to each parameter sample before taking the cosine.
    ///
    /// Must be finite. Use [`COS_SCALE`] or [`UNSCALED_COS`] to reproduce the
    /// two reference target definitions.
    pub cos_scale: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cos_scale: COS_SCALE,
        }
    }
}

impl BuildConfig {
    /// Configuration for the plain `cos(t)` target.
    pub fn unscaled() -> Self {
        Self {
            cos_scale: UNSCALED_COS,
        }
    }
}
