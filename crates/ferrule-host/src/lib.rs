//! Ferrule Host Module System
//!
//! This crate provides the host-runtime side of the ferrule extension
//! bridge: the module registry a dynamically-typed caller imports from.
//! It includes:
//!
//! - [`HostRegistry`]: register-once module storage, import by name,
//!   call-through, and introspection
//!
//! # Registration Semantics
//!
//! A module is registered exactly once per name. Re-registering a taken
//! name is rejected with [`HostError::AlreadyRegistered`] and leaves the
//! existing registration untouched, so a misbehaving embedder cannot
//! corrupt a live module. Descriptors are immutable after registration
//! and shared as `Arc`s; the registry is safe to use from multiple
//! threads without locking.
//!
//! # Example
//!
//! ```ignore
//! use ferrule_host::HostRegistry;
//! use ferrule_value::Value;
//!
//! let registry = HostRegistry::new();
//! registry.register(my_module)?;
//!
//! let result = registry.call("math", "add", &[Value::Int(2), Value::Int(3)])?;
//! assert_eq!(result, Value::Int(5));
//! ```

pub mod error;
pub mod registry;

// Re-export main types
pub use error::{HostError, HostResult};
pub use registry::HostRegistry;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{HostError, HostResult};
    pub use crate::registry::HostRegistry;
}
