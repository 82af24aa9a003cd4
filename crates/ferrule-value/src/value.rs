//! Dynamic values exchanged across the extension boundary.
//!
//! A [`Value`] is what the host runtime hands the bridge at call time and
//! what the bridge hands back when a call returns. Values carry no static
//! type information; every native function call starts by decoding them
//! into the types its signature declares.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically-typed host value.
///
/// The host integer is a signed 64-bit value; wider native results must be
/// narrowed through a checked conversion before they can cross back into
/// the host runtime.
///
/// Serialization is untagged, so JSON scalars map directly onto variants
/// (`null` ↔ `Unit`, numbers ↔ `Int`/`Float`, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absence of a value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An owned UTF-8 string.
    Str(String),
}

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Get the host-visible name of this value's type.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this is the unit value.
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Get the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// The kind of a dynamic value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool,
    /// A signed 64-bit integer.
    Int,
    /// A double-precision float.
    Float,
    /// A UTF-8 string.
    Str,
}

impl ValueKind {
    /// Get the host-visible name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Unit => "unit",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::Unit.kind(), ValueKind::Unit);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Int(7).kind(), ValueKind::Int);
        assert_eq!(Value::Float(1.5).kind(), ValueKind::Float);
        assert_eq!(Value::Str("hi".into()).kind(), ValueKind::Str);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_float(), None);
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert!(Value::Unit.is_unit());
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("abc"), Value::Str("abc".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Str("a\"b".into()).to_string(), "\"a\\\"b\"");
        assert_eq!(Value::Unit.to_string(), "()");
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let json = serde_json::to_string(&Value::Int(5)).unwrap();
        assert_eq!(json, "5");

        let back: Value = serde_json::from_str("5").unwrap();
        assert_eq!(back, Value::Int(5));

        let null: Value = serde_json::from_str("null").unwrap();
        assert_eq!(null, Value::Unit);

        let s: Value = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(s, Value::Str("text".to_string()));
    }
}
