//! Error types for boundary conversions.

use thiserror::Error;

use crate::convert::ScalarType;
use crate::value::ValueKind;

/// Errors produced when converting between dynamic values and native types.
///
/// Decoding failures (`TypeMismatch`, `IntOutOfRange`) mean an argument did
/// not satisfy a function's declared signature. `Unrepresentable` means a
/// native result could not be expressed as a host value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The dynamic value's type does not match the declared native type.
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        /// The declared native type.
        expected: ScalarType,
        /// The kind of value actually supplied.
        found: ValueKind,
    },

    /// An integer argument lies outside the declared type's range.
    ///
    /// Out-of-range integers are rejected, never wrapped.
    #[error("value {value} does not fit in {target}")]
    IntOutOfRange {
        /// The declared native type.
        target: ScalarType,
        /// The supplied value.
        value: i64,
    },

    /// A native result cannot be represented as a host value.
    #[error("native result does not fit in {target}")]
    Unrepresentable {
        /// The declared result type.
        target: ScalarType,
    },
}

/// Result type for conversions.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
