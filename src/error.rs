//! Validation errors.
//!
//! The public operations report invalid input as `None`. The `try_*` variants
//! return an [`InputError`] instead, so callers can see which check failed.

/// Which validation check rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// A requested dimension was zero or negative.
    NonPositiveDimension,
    /// A matrix had zero rows or zero columns.
    EmptyMatrix,
    /// Nested rows did not all have the same length.
    RaggedRows,
    /// A vector length did not match the paired matrix dimension.
    LengthMismatch,
    /// A numeric parameter was NaN or infinite.
    NonFiniteParameter,
    /// The requested shape holds more entries than can be allocated.
    DimensionTooLarge,
}

/// A rejected input, with the failed check and a readable message.
#[derive(Clone)]
pub struct InputError {
    kind: InputErrorKind,
    message: String,
}

impl InputError {
    pub fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> InputErrorKind {
        self.kind
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for InputError {}
