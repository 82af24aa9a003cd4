//! Ferrule Value Model
//!
//! This crate provides the dynamic value model for the ferrule extension
//! bridge. It includes:
//!
//! - [`Value`]: the dynamically-typed host value presented at call time
//! - [`ScalarType`]: native scalar type tags used in declared signatures
//! - [`FromValue`] / [`IntoValue`]: checked decode/encode between dynamic
//!   values and native Rust scalars
//!
//! # Conversion Discipline
//!
//! Every conversion is checked. An argument that does not match its
//! declared type, an integer outside the target's range, or a native
//! result wider than the host integer all surface as a [`ConvertError`];
//! nothing is wrapped, truncated, or silently coerced.
//!
//! # Example
//!
//! ```
//! use ferrule_value::{FromValue, IntoValue, Value};
//!
//! let decoded = i64::from_value(&Value::Int(41)).unwrap();
//! assert_eq!(decoded, 41);
//!
//! let encoded = (decoded + 1).into_value().unwrap();
//! assert_eq!(encoded, Value::Int(42));
//! ```

pub mod convert;
pub mod error;
pub mod value;

// Re-export main types at crate root
pub use convert::{FromValue, IntoValue, ScalarType};
pub use error::{ConvertError, ConvertResult};
pub use value::{Value, ValueKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::convert::{FromValue, IntoValue, ScalarType};
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::value::{Value, ValueKind};
}
