//! Least-squares operations.
//!
//! - build a synthetic Vandermonde / cosine system
//! - reduce a rectangular system to the normal equations
//! - evaluate the residual norm of a candidate solution
//!
//! Each operation has an `Option` entry point (absent = invalid input) and a
//! `try_*` twin that returns the [`InputError`](crate::error::InputError).

pub mod build;
pub mod reduce;
pub mod residual;
pub mod validate;

pub use build::*;
pub use reduce::*;
pub use residual::*;
pub use validate::{matrix_from_rows, try_matrix_from_rows};
