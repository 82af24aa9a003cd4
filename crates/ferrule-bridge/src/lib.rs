//! Ferrule Bridge - Native Function Extension Bridge
//!
//! This crate provides the core of the ferrule extension bridge: the
//! machinery that lets a dynamically-typed caller invoke statically-typed
//! native Rust functions safely. It includes:
//!
//! - [`FunctionBinding`]: an exported native function plus its declared
//!   calling convention and the decode → call → encode pipeline
//! - [`Signature`] / [`Param`]: declared calling conventions
//! - [`CallFrame`]: the ephemeral per-invocation argument view
//! - [`ModuleDescriptor`] / [`ModuleBuilder`]: immutable module identity
//!   and metadata
//! - [`ModuleConfig`]: externally-supplied metadata overrides
//!
//! # Boundary Protocol
//!
//! Every call crosses the boundary the same way: the raw argument tuple is
//! checked for arity, each positional argument is decoded left to right
//! into the type the signature declares (short-circuiting on the first
//! failure), the native closure runs with exactly those decoded values,
//! and the result passes through a checked encode back into a host value.
//! A native function can never observe malformed input, and a failed call
//! leaves the module fully usable.
//!
//! # Quick Start
//!
//! ```
//! use ferrule_bridge::{FunctionBinding, ModuleBuilder};
//! use ferrule_value::Value;
//!
//! let module = ModuleBuilder::new("math")
//!     .doc("Integer arithmetic for the host runtime.")
//!     .version("1.0.0")
//!     .function(FunctionBinding::wrap2(
//!         "add",
//!         "Adds two integers.",
//!         ["a", "b"],
//!         |a: i64, b: i64| i128::from(a) + i128::from(b),
//!     ))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let binding = module.function("add").unwrap();
//! let result = binding.invoke(&[Value::Int(2), Value::Int(3)]).unwrap();
//! assert_eq!(result, Value::Int(5));
//! ```
//!
//! # Error Categories
//!
//! A failed call reports one of two categories: a bad call signature
//! (wrong arity or a non-convertible argument, detected before the native
//! function runs) or a result-encoding failure (the native result does not
//! fit the host type). Both surface as [`CallError`]; nothing is wrapped,
//! retried, or logged on the call path.

pub mod binding;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod frame;
pub mod signature;

// Re-export main types at crate root
pub use binding::FunctionBinding;
pub use config::ModuleConfig;
pub use descriptor::{ModuleBuilder, ModuleDescriptor};
pub use error::{
    BridgeError, CallError, CallResult, ConfigError, ConfigResult, RegistrationError,
    RegistrationResult, Result, SignatureError,
};
pub use frame::CallFrame;
pub use signature::{Param, Signature};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::binding::FunctionBinding;
    pub use crate::config::ModuleConfig;
    pub use crate::descriptor::{ModuleBuilder, ModuleDescriptor};
    pub use crate::error::{BridgeError, CallError, CallResult, Result};
    pub use crate::signature::{Param, Signature};
}
