//! Error types for the host module registry.

use thiserror::Error;

use ferrule_bridge::CallError;

/// Errors related to the host's module system.
#[derive(Debug, Error)]
pub enum HostError {
    /// A module with this name is already registered.
    #[error("module already registered: '{module}'")]
    AlreadyRegistered {
        /// The taken module name.
        module: String,
    },

    /// No module with this name is registered.
    #[error("module not found: '{module}'")]
    ModuleNotFound {
        /// The requested module name.
        module: String,
    },

    /// The module does not export a function with this name.
    #[error("function not found: '{module}::{function}'")]
    FunctionNotFound {
        /// The module that was searched.
        module: String,
        /// The requested function name.
        function: String,
    },

    /// A call crossed the bridge and failed there.
    #[error(transparent)]
    Call(#[from] CallError),
}

/// Result type for host operations.
pub type HostResult<T> = std::result::Result<T, HostError>;
