//! Checked conversions between dynamic values and native scalar types.
//!
//! Decoding ([`FromValue`]) and encoding ([`IntoValue`]) are the two halves
//! of the boundary protocol. Both are total functions over their inputs:
//! anything that does not convert cleanly is an error, never a wrap,
//! truncation, or silent coercion.
//!
//! The numeric rules are deliberately narrow:
//!
//! - `Int` decodes to `i64` directly and to `i32` with a range check;
//!   an out-of-range integer is a conversion error.
//! - `Int` widens to `f64` for float parameters (the usual dynamic-runtime
//!   numeric tower), but `Float` never decodes to an integer type, even
//!   when its value happens to be integral.
//! - `Bool` is not a number.
//! - Encoding goes through the same checked path: a native result wider
//!   than the host integer is rejected, not wrapped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};
use crate::value::Value;

/// A native scalar type as declared in a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// No value.
    Unit,
    /// A boolean.
    Bool,
    /// A signed 32-bit integer.
    I32,
    /// A signed 64-bit integer.
    I64,
    /// A double-precision float.
    F64,
    /// A UTF-8 string.
    Str,
}

impl ScalarType {
    /// Get the name used in rendered signatures and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Unit => "unit",
            ScalarType::Bool => "bool",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F64 => "f64",
            ScalarType::Str => "str",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decode a dynamic value into a native type.
///
/// Implementations must reject any value that does not match the declared
/// type; the native function behind a binding only ever sees successfully
/// decoded arguments.
pub trait FromValue: Sized {
    /// The declared scalar type this decoder targets.
    const SCALAR: ScalarType;

    /// Decode `value`, or report why it does not convert.
    fn from_value(value: &Value) -> ConvertResult<Self>;
}

/// Encode a native result as a dynamic value.
///
/// Encoding is checked: results outside the representable range of the
/// host type are reported as errors rather than narrowed.
pub trait IntoValue {
    /// The declared scalar type of the encoded value.
    const SCALAR: ScalarType;

    /// Encode `self` as a host value.
    fn into_value(self) -> ConvertResult<Value>;
}

impl FromValue for bool {
    const SCALAR: ScalarType = ScalarType::Bool;

    fn from_value(value: &Value) -> ConvertResult<Self> {
        value.as_bool().ok_or(ConvertError::TypeMismatch {
            expected: <Self as FromValue>::SCALAR,
            found: value.kind(),
        })
    }
}

impl FromValue for i64 {
    const SCALAR: ScalarType = ScalarType::I64;

    fn from_value(value: &Value) -> ConvertResult<Self> {
        value.as_int().ok_or(ConvertError::TypeMismatch {
            expected: <Self as FromValue>::SCALAR,
            found: value.kind(),
        })
    }
}

impl FromValue for i32 {
    const SCALAR: ScalarType = ScalarType::I32;

    fn from_value(value: &Value) -> ConvertResult<Self> {
        let wide = value.as_int().ok_or(ConvertError::TypeMismatch {
            expected: <Self as FromValue>::SCALAR,
            found: value.kind(),
        })?;
        i32::try_from(wide).map_err(|_| ConvertError::IntOutOfRange {
            target: <Self as FromValue>::SCALAR,
            value: wide,
        })
    }
}

impl FromValue for f64 {
    const SCALAR: ScalarType = ScalarType::F64;

    fn from_value(value: &Value) -> ConvertResult<Self> {
        match value {
            Value::Float(x) => Ok(*x),
            // Integers widen into the float tower; nothing else does.
            Value::Int(i) => Ok(*i as f64),
            other => Err(ConvertError::TypeMismatch {
                expected: <Self as FromValue>::SCALAR,
                found: other.kind(),
            }),
        }
    }
}

impl FromValue for String {
    const SCALAR: ScalarType = ScalarType::Str;

    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or(ConvertError::TypeMismatch {
                expected: <Self as FromValue>::SCALAR,
                found: value.kind(),
            })
    }
}

impl IntoValue for () {
    const SCALAR: ScalarType = ScalarType::Unit;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Unit)
    }
}

impl IntoValue for bool {
    const SCALAR: ScalarType = ScalarType::Bool;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Bool(self))
    }
}

impl IntoValue for i32 {
    const SCALAR: ScalarType = ScalarType::I32;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Int(i64::from(self)))
    }
}

impl IntoValue for i64 {
    const SCALAR: ScalarType = ScalarType::I64;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Int(self))
    }
}

impl IntoValue for i128 {
    const SCALAR: ScalarType = ScalarType::I64;

    fn into_value(self) -> ConvertResult<Value> {
        i64::try_from(self)
            .map(Value::Int)
            .map_err(|_| ConvertError::Unrepresentable {
                target: Self::SCALAR,
            })
    }
}

impl IntoValue for u64 {
    const SCALAR: ScalarType = ScalarType::I64;

    fn into_value(self) -> ConvertResult<Value> {
        i64::try_from(self)
            .map(Value::Int)
            .map_err(|_| ConvertError::Unrepresentable {
                target: Self::SCALAR,
            })
    }
}

impl IntoValue for f64 {
    const SCALAR: ScalarType = ScalarType::F64;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Float(self))
    }
}

impl IntoValue for String {
    const SCALAR: ScalarType = ScalarType::Str;

    fn into_value(self) -> ConvertResult<Value> {
        Ok(Value::Str(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_decode_i64() {
        assert_eq!(i64::from_value(&Value::Int(40)).unwrap(), 40);
        assert_eq!(i64::from_value(&Value::Int(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn test_decode_i64_rejects_non_integers() {
        let err = i64::from_value(&Value::Str("x".into())).unwrap_err();
        assert_eq!(
            err,
            ConvertError::TypeMismatch {
                expected: ScalarType::I64,
                found: ValueKind::Str,
            }
        );

        // Integral floats still do not decode as integers.
        assert!(i64::from_value(&Value::Float(3.0)).is_err());
        // Booleans are not numbers.
        assert!(i64::from_value(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_decode_i32_range_checked() {
        assert_eq!(i32::from_value(&Value::Int(-7)).unwrap(), -7);
        assert_eq!(
            i32::from_value(&Value::Int(i64::from(i32::MAX))).unwrap(),
            i32::MAX
        );

        let err = i32::from_value(&Value::Int(i64::from(i32::MAX) + 1)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IntOutOfRange {
                target: ScalarType::I32,
                value: i64::from(i32::MAX) + 1,
            }
        );
    }

    #[test]
    fn test_decode_f64_widens_ints() {
        assert_eq!(f64::from_value(&Value::Float(2.5)).unwrap(), 2.5);
        assert_eq!(f64::from_value(&Value::Int(2)).unwrap(), 2.0);
        assert!(f64::from_value(&Value::Bool(false)).is_err());
    }

    #[test]
    fn test_decode_string() {
        assert_eq!(
            String::from_value(&Value::Str("abc".into())).unwrap(),
            "abc"
        );
        assert!(String::from_value(&Value::Int(1)).is_err());
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(5i64.into_value().unwrap(), Value::Int(5));
        assert_eq!(5i32.into_value().unwrap(), Value::Int(5));
        assert_eq!(().into_value().unwrap(), Value::Unit);
        assert_eq!(true.into_value().unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_encode_i128_checked() {
        let fits = i128::from(i64::MAX);
        assert_eq!(fits.into_value().unwrap(), Value::Int(i64::MAX));

        let err = (i128::from(i64::MAX) + 1).into_value().unwrap_err();
        assert_eq!(
            err,
            ConvertError::Unrepresentable {
                target: ScalarType::I64,
            }
        );

        assert!((i128::from(i64::MIN) - 1).into_value().is_err());
    }

    #[test]
    fn test_encode_u64_checked() {
        assert_eq!(7u64.into_value().unwrap(), Value::Int(7));
        assert!(u64::MAX.into_value().is_err());
    }
}
