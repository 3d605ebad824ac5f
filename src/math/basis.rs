//! Sample grids and the monomial (Vandermonde) basis.
//!
//! The design matrix for a polynomial fit of degree `n - 1` has rows
//!
//! ```text
//! [1, t, t^2, ..., t^(n-1)]
//! ```
//!
//! Powers are built by repeated multiplication rather than `powi`, so each
//! row costs `n - 1` multiplications and `t = 0` gives `[1, 0, 0, ...]`.

use nalgebra::DMatrix;

/// Generate `steps` evenly spaced points between `start` and `stop` (inclusive).
///
/// With a single step the only sample is `start`. The last sample is pinned to
/// `stop` exactly.
pub fn linspace(start: f64, stop: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = stop;
            out
        }
    }
}

/// Fill a design row `[1, t, t^2, ...]` of length `out.len()`.
pub fn fill_monomial_row(t: f64, out: &mut [f64]) {
    let mut power = 1.0;
    for slot in out.iter_mut() {
        *slot = power;
        power *= t;
    }
}

/// Vandermonde matrix with increasing powers: entry `(i, j)` is `t[i]^j`.
pub fn vander(t: &[f64], columns: usize) -> DMatrix<f64> {
    let mut row = vec![0.0; columns];
    let mut out = DMatrix::zeros(t.len(), columns);
    for (i, &ti) in t.iter().enumerate() {
        fill_monomial_row(ti, &mut row);
        for (j, &v) in row.iter().enumerate() {
            out[(i, j)] = v;
        }
    }
    out
}
