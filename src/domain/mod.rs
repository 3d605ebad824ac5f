//! Domain types shared by the least-squares operations.

pub mod types;

pub use types::*;
