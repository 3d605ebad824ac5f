//! Shape checks shared by the least-squares operations.
//!
//! Every check returns `Err(InputError)` on the first failure and logs the
//! rejection at debug level. Operations run these before touching any data.

use nalgebra::{DMatrix, DVector};

use crate::error::{InputError, InputErrorKind};

fn reject(kind: InputErrorKind, message: String) -> InputError {
    log::debug!("rejected input: {message}");
    InputError::new(kind, message)
}

/// Convert a requested dimension to `usize`, rejecting zero and negatives.
pub fn positive_dimension(name: &str, value: i64) -> Result<usize, InputError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(reject(
            InputErrorKind::NonPositiveDimension,
            format!("{name} must be positive, got {value}."),
        )),
    }
}

/// Largest number of `f64` entries a single allocation can hold.
const MAX_ENTRIES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Reject `rows × columns` shapes whose entry count overflows an allocation.
pub fn allocatable(rows: usize, columns: usize) -> Result<(), InputError> {
    match rows.checked_mul(columns) {
        Some(entries) if entries <= MAX_ENTRIES => Ok(()),
        _ => Err(reject(
            InputErrorKind::DimensionTooLarge,
            format!("Shape ({rows}, {columns}) is too large to allocate."),
        )),
    }
}

/// Reject NaN and infinite parameters.
pub fn finite_parameter(name: &str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(reject(
            InputErrorKind::NonFiniteParameter,
            format!("{name} must be finite, got {value}."),
        ))
    }
}

/// Reject matrices with zero rows or zero columns.
pub fn non_empty(a: &DMatrix<f64>) -> Result<(), InputError> {
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Err(reject(
            InputErrorKind::EmptyMatrix,
            format!("Matrix must have at least one row and column, got shape ({rows}, {cols})."),
        ));
    }
    Ok(())
}

/// `v.len()` must equal `expected`.
pub fn matching_length(
    name: &str,
    v: &DVector<f64>,
    expected: usize,
    dimension: &str,
) -> Result<(), InputError> {
    if v.len() != expected {
        return Err(reject(
            InputErrorKind::LengthMismatch,
            format!(
                "{name} has length {}, expected {expected} (matrix {dimension}).",
                v.len()
            ),
        ));
    }
    Ok(())
}

/// Build a matrix from nested rows, rejecting ragged or empty input.
pub fn try_matrix_from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>, InputError> {
    let cols = rows.first().map_or(0, Vec::len);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(reject(
                InputErrorKind::RaggedRows,
                format!("Row {i} has {} entries, expected {cols}.", row.len()),
            ));
        }
    }

    let a = DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]);
    non_empty(&a)?;
    Ok(a)
}

/// [`try_matrix_from_rows`], with any failure reported as `None`.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Option<DMatrix<f64>> {
    try_matrix_from_rows(rows).ok()
}
