//! `normal-lsq` library crate.
//!
//! Small helpers for setting up and checking linear least-squares problems:
//!
//! - [`build_system`]: Vandermonde design matrix plus cosine target
//! - [`reduce_to_square`]: `(A, b)` to the normal equations `(A^T A, A^T b)`
//! - [`residual_norm`]: `||A x - b||_2` for a candidate `x`
//!
//! All operations are pure and return `None` on invalid input.

pub mod domain;
pub mod error;
pub mod lsq;
pub mod math;

pub use domain::{BuildConfig, COS_SCALE, System, UNSCALED_COS};
pub use error::{InputError, InputErrorKind};
pub use lsq::*;
