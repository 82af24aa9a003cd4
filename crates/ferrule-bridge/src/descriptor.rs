//! Module descriptors and the builder that produces them.
//!
//! A [`ModuleDescriptor`] is the identity the host runtime keeps for an
//! imported extension module: name, docstring, version string, and the
//! ordered collection of exported function bindings. It is built once via
//! [`ModuleBuilder`] and immutable afterwards; the host's registry shares
//! it as an `Arc` for the lifetime of the import.

use tracing::debug;

use crate::binding::FunctionBinding;
use crate::config::ModuleConfig;
use crate::error::{RegistrationError, RegistrationResult};

/// The registered identity and metadata of an extension module.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    /// Module name used by the host's import mechanism.
    name: String,
    /// Human-readable documentation string.
    doc: String,
    /// Version string reported through introspection.
    version: String,
    /// Exported bindings, in registration order.
    bindings: Vec<FunctionBinding>,
}

impl ModuleDescriptor {
    /// The module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The documentation string.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The exported bindings, in registration order.
    pub fn functions(&self) -> &[FunctionBinding] {
        &self.bindings
    }

    /// Look up an exported binding by name.
    pub fn function(&self, name: &str) -> Option<&FunctionBinding> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    /// Check if the module exports a binding with the given name.
    pub fn has_function(&self, name: &str) -> bool {
        self.function(name).is_some()
    }
}

/// Builder for constructing a [`ModuleDescriptor`].
///
/// # Example
///
/// ```
/// use ferrule_bridge::{FunctionBinding, ModuleBuilder};
///
/// let module = ModuleBuilder::new("math")
///     .doc("Integer arithmetic for the host runtime.")
///     .version("1.0.0")
///     .function(FunctionBinding::wrap2(
///         "add",
///         "Adds two integers.",
///         ["a", "b"],
///         |a: i64, b: i64| i128::from(a) + i128::from(b),
///     ))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(module.has_function("add"));
/// ```
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    doc: String,
    version: String,
    bindings: Vec<FunctionBinding>,
}

impl ModuleBuilder {
    /// Start building a module with the given import name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            version: String::new(),
            bindings: Vec::new(),
        }
    }

    /// Set the module documentation string.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Set the module version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Apply configured overrides for version and documentation.
    pub fn with_config(mut self, config: &ModuleConfig) -> Self {
        if let Some(version) = &config.version {
            self.version = version.clone();
        }
        if let Some(doc) = &config.doc {
            self.doc = doc.clone();
        }
        self
    }

    /// Export a function binding.
    ///
    /// # Errors
    ///
    /// Returns an error if a binding with the same exported name was
    /// already added; the builder is unchanged in that case.
    pub fn function(mut self, binding: FunctionBinding) -> RegistrationResult<Self> {
        if self.bindings.iter().any(|b| b.name() == binding.name()) {
            return Err(RegistrationError::DuplicateFunction {
                module: self.name.clone(),
                name: binding.name().to_string(),
            });
        }
        self.bindings.push(binding);
        Ok(self)
    }

    /// Finish building the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the module name is empty or contains
    /// whitespace, which would make it unusable as an import identifier.
    pub fn build(self) -> RegistrationResult<ModuleDescriptor> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(RegistrationError::InvalidName(self.name));
        }

        debug!(
            module = %self.name,
            functions = self.bindings.len(),
            "Built module descriptor"
        );

        Ok(ModuleDescriptor {
            name: self.name,
            doc: self.doc,
            version: self.version,
            bindings: self.bindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_binding() -> FunctionBinding {
        FunctionBinding::wrap2("add", "Adds two integers.", ["a", "b"], |a: i64, b: i64| {
            i128::from(a) + i128::from(b)
        })
    }

    #[test]
    fn test_build_and_introspect() {
        let module = ModuleBuilder::new("math")
            .doc("Integer arithmetic.")
            .version("0.3.1")
            .function(add_binding())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(module.name(), "math");
        assert_eq!(module.doc(), "Integer arithmetic.");
        assert_eq!(module.version(), "0.3.1");
        assert_eq!(module.functions().len(), 1);
        assert!(module.has_function("add"));
        assert!(!module.has_function("sub"));
    }

    #[test]
    fn test_duplicate_function_rejected() {
        let result = ModuleBuilder::new("math")
            .function(add_binding())
            .unwrap()
            .function(add_binding());

        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateFunction { .. })
        ));
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert!(matches!(
            ModuleBuilder::new("").build(),
            Err(RegistrationError::InvalidName(_))
        ));
        assert!(matches!(
            ModuleBuilder::new("two words").build(),
            Err(RegistrationError::InvalidName(_))
        ));
    }

    #[test]
    fn test_config_overrides() {
        let config = ModuleConfig::new().with_version("9.9.9");
        let module = ModuleBuilder::new("math")
            .doc("Original doc.")
            .version("0.0.1")
            .with_config(&config)
            .build()
            .unwrap();

        assert_eq!(module.version(), "9.9.9");
        assert_eq!(module.doc(), "Original doc.");
    }
}
