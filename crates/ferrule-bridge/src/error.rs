//! Error types for the extension bridge.
//!
//! Call failures fall into exactly two user-facing categories: the
//! arguments did not match the declared signature, or the native result
//! could not be encoded as a host value. Everything else here is
//! registration- or configuration-time.

use thiserror::Error;

use ferrule_value::ConvertError;

/// Top-level error type for bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Error while invoking a function binding.
    #[error("Call error: {0}")]
    Call(#[from] CallError),

    /// Error while building a module descriptor.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Error while loading module configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced by invoking a function binding.
#[derive(Debug, Error)]
pub enum CallError {
    /// The supplied arguments do not match the declared signature.
    ///
    /// Wrong arity and non-convertible arguments are the same category;
    /// in both cases the native function was never invoked.
    #[error("bad call signature for '{function}': {reason}")]
    BadSignature {
        /// The function that rejected the call.
        function: String,
        /// What was wrong with the arguments.
        reason: SignatureError,
    },

    /// The native result could not be represented as a host value.
    ///
    /// The native function ran to completion; its result was rejected by
    /// the checked encode step rather than wrapped or truncated.
    #[error("result encoding failed for '{function}': {source}")]
    ResultEncoding {
        /// The function whose result was rejected.
        function: String,
        /// The underlying conversion failure.
        source: ConvertError,
    },
}

impl CallError {
    /// The name of the function the failed call targeted.
    pub fn function(&self) -> &str {
        match self {
            CallError::BadSignature { function, .. } => function,
            CallError::ResultEncoding { function, .. } => function,
        }
    }
}

/// Why a call's arguments were rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignatureError {
    /// The wrong number of arguments was supplied.
    #[error("expected {expected} argument(s), got {got}")]
    Arity {
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        got: usize,
    },

    /// A positional argument did not convert to its declared type.
    #[error("argument {index} ('{name}'): {source}")]
    Argument {
        /// Zero-based position of the offending argument.
        index: usize,
        /// The declared parameter name.
        name: String,
        /// The underlying conversion failure.
        source: ConvertError,
    },
}

/// Errors produced while building a module descriptor.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A function with this name is already exported by the module.
    #[error("function already registered: {module}::{name}")]
    DuplicateFunction {
        /// The module being built.
        module: String,
        /// The duplicated export name.
        name: String,
    },

    /// The module name is unusable as an import identifier.
    #[error("invalid module name: '{0}'")]
    InvalidName(String),
}

/// Errors produced while loading module configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Result type alias for call operations.
pub type CallResult<T> = std::result::Result<T, CallError>;

/// Result type alias for registration operations.
pub type RegistrationResult<T> = std::result::Result<T, RegistrationError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
