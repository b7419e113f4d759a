/*
Error types for the fixture helpers
Inputs are test-authored constants, so every error is final: nothing is retried.
*/

use alloc::string::{String, ToString};
use core::convert::Infallible;
use thiserror::Error;

/// Errors that can occur while normalising inputs or evaluating formulas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Hex string contains invalid characters
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// Byte or string input does not fit the fixed width
    #[error("input is too large for fixed size bytes: {len} > {size}")]
    InputTooLong { len: usize, size: usize },

    /// Integer input does not fit the fixed width
    #[error("integer does not fit in {size} bytes")]
    IntegerTooLarge { size: usize },

    /// Byte input was expected to already have an exact length
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Division by zero in integer helpers
    #[error("division by zero")]
    DivisionByZero,

    /// Value kind that cannot be converted to bytes
    #[error("unsupported value kind: {0}, expected an integer, string or bytes")]
    UnsupportedKind(&'static str),
}

impl FixtureError {
    /// Whether the error comes from an input that could not be normalised
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FixtureError::InvalidHex(_)
                | FixtureError::InputTooLong { .. }
                | FixtureError::IntegerTooLarge { .. }
                | FixtureError::InvalidLength { .. }
        )
    }
}

impl From<hex::FromHexError> for FixtureError {
    fn from(err: hex::FromHexError) -> Self {
        FixtureError::InvalidHex(err.to_string())
    }
}

impl From<Infallible> for FixtureError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for fixture helper operations
pub type Result<T> = core::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FixtureError::InputTooLong { len: 21, size: 20 };
        assert!(err.to_string().contains("too large"));
        assert!(err.to_string().contains("21"));
    }

    #[test]
    fn test_error_classification() {
        assert!(FixtureError::IntegerTooLarge { size: 20 }.is_input_error());
        assert!(FixtureError::from(hex::FromHexError::OddLength).is_input_error());
        assert!(!FixtureError::DivisionByZero.is_input_error());
        assert!(!FixtureError::UnsupportedKind("null").is_input_error());
    }

    #[test]
    fn test_hex_error_keeps_message() {
        let err = FixtureError::from(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 });
        assert!(matches!(err, FixtureError::InvalidHex(_)));
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_unsupported_kind_names_kind() {
        let err = FixtureError::UnsupportedKind("boolean");
        assert!(err.to_string().contains("boolean"));
    }
}
