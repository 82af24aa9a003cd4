//! # Ferrule - Native Function Extension Bridge
//!
//! Ferrule lets a dynamically-typed host runtime call statically-typed
//! native Rust functions through a single, uniform boundary protocol:
//! decode the dynamic arguments against a declared signature, invoke the
//! native function with exactly the decoded values, and encode the result
//! back through a checked conversion.
//!
//! ## Features
//!
//! - **Checked Boundary**: malformed arguments never reach native code;
//!   out-of-range results are rejected, never wrapped
//! - **Immutable Registration**: module identity and metadata are fixed at
//!   registration time and shared for the lifetime of the import
//! - **Stateless Calls**: every invocation owns its own call frame, so
//!   concurrent callers need no locking
//! - **Introspection**: names, docstrings, versions, and rendered
//!   signatures are all host-visible
//!
//! ## Quick Start
//!
//! ```
//! use ferrule::prelude::*;
//!
//! // Build a host with the built-in modules registered.
//! let host = ferrule::bootstrap_host(&ModuleConfig::new()).unwrap();
//!
//! let result = host
//!     .call("math", "add", &[Value::Int(2), Value::Int(3)])
//!     .unwrap();
//! assert_eq!(result, Value::Int(5));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │            Dynamic caller (CLI, embedder)           │
//! ├─────────────────────────────────────────────────────┤
//! │                  ferrule (facade)                   │
//! ├─────────────────────────────────────────────────────┤
//! │ ferrule-host     │ ferrule-bridge  │ ferrule-value  │
//! │ (module          │ (bindings,      │ (dynamic       │
//! │  registry)       │  descriptors)   │  values)       │
//! ├─────────────────────────────────────────────────────┤
//! │              Native functions (plain Rust)          │
//! └─────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tracing::info;

use ferrule_bridge::{ModuleConfig, RegistrationError};
use ferrule_host::{HostError, HostRegistry};

pub mod math;

// Re-export from sub-crates
pub use ferrule_bridge;
pub use ferrule_host;
pub use ferrule_value;

/// Errors produced while bootstrapping a host.
#[derive(Debug, Error)]
pub enum FerruleError {
    /// A built-in module failed to build.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// A built-in module failed to register.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Create a host registry with the built-in modules registered.
///
/// `config` supplies metadata overrides (version, documentation) for the
/// built-in modules.
///
/// # Errors
///
/// Returns an error if a built-in module fails to build or register;
/// neither can happen with a default `config`.
pub fn bootstrap_host(config: &ModuleConfig) -> Result<HostRegistry, FerruleError> {
    let registry = HostRegistry::new();
    registry.register(math::module(config)?)?;

    info!(modules = registry.len(), "Bootstrapped host registry");
    Ok(registry)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::FerruleError;
    pub use ferrule_bridge::{
        CallError, FunctionBinding, ModuleBuilder, ModuleConfig, ModuleDescriptor, Signature,
    };
    pub use ferrule_host::{HostError, HostRegistry};
    pub use ferrule_value::{FromValue, IntoValue, ScalarType, Value, ValueKind};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn host() -> HostRegistry {
        crate::bootstrap_host(&ModuleConfig::new()).unwrap()
    }

    #[test]
    fn test_end_to_end_call() {
        let host = host();

        let result = host
            .call("math", "add", &[Value::Int(2), Value::Int(3)])
            .unwrap();
        assert_eq!(result, Value::Int(5));
    }

    #[test]
    fn test_end_to_end_errors() {
        let host = host();

        assert!(matches!(
            host.call("math", "add", &[Value::Int(2)]),
            Err(HostError::Call(CallError::BadSignature { .. }))
        ));
        assert!(matches!(
            host.call("math", "add", &[Value::Str("x".into()), Value::Int(3)]),
            Err(HostError::Call(CallError::BadSignature { .. }))
        ));
        assert!(matches!(
            host.call("math", "add", &[Value::Int(i64::MAX), Value::Int(1)]),
            Err(HostError::Call(CallError::ResultEncoding { .. }))
        ));

        // Failures leave the module importable and usable.
        assert_eq!(
            host.call("math", "add", &[Value::Int(4), Value::Int(4)])
                .unwrap(),
            Value::Int(8)
        );
    }

    #[test]
    fn test_end_to_end_introspection() {
        let host = host();
        let module = host.import("math").unwrap();

        assert_eq!(module.name(), "math");
        assert_eq!(module.doc(), crate::math::MODULE_DOC);
        assert_eq!(module.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(
            module.functions()[0].render(),
            "add(a: i64, b: i64) -> i64"
        );
    }

    #[test]
    fn test_configured_version_is_reported() {
        let config = ModuleConfig::new().with_version("4.5.6");
        let host = crate::bootstrap_host(&config).unwrap();

        assert_eq!(host.import("math").unwrap().version(), "4.5.6");
    }
}
