//! Mathematical utilities: sample grids, the monomial basis, transpose products
//! and residual norms.

pub mod basis;
pub mod norm;
pub mod products;

pub use basis::*;
pub use norm::*;
pub use products::*;
