//! The host runtime's module registry.
//!
//! [`HostRegistry`] plays the part of the host's import mechanism: modules
//! are registered once, looked up by name, and introspected. Descriptors
//! are immutable and shared as `Arc`s, and the registry itself is a
//! concurrent map, so imports and calls from multiple threads need no
//! external locking.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info};

use ferrule_bridge::ModuleDescriptor;
use ferrule_value::Value;

use crate::error::{HostError, HostResult};

/// The host's registry of imported extension modules.
///
/// # Example
///
/// ```
/// use ferrule_bridge::{FunctionBinding, ModuleBuilder};
/// use ferrule_host::HostRegistry;
/// use ferrule_value::Value;
///
/// let registry = HostRegistry::new();
/// let module = ModuleBuilder::new("math")
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
/// registry.register(module).unwrap();
///
/// let result = registry
///     .call("math", "add", &[Value::Int(2), Value::Int(3)])
///     .unwrap();
/// assert_eq!(result, Value::Int(5));
/// ```
#[derive(Default)]
pub struct HostRegistry {
    /// Map of module name to registered descriptor.
    modules: DashMap<String, Arc<ModuleDescriptor>>,
}

impl HostRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
        }
    }

    /// Register a module under its descriptor name.
    ///
    /// Registration happens once per module name; attempting to register
    /// under a taken name fails and leaves the existing registration
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a module with the same name is already
    /// registered.
    pub fn register(&self, descriptor: ModuleDescriptor) -> HostResult<Arc<ModuleDescriptor>> {
        let name = descriptor.name().to_string();

        let shared = match self.modules.entry(name.clone()) {
            Entry::Occupied(_) => {
                return Err(HostError::AlreadyRegistered { module: name });
            }
            Entry::Vacant(vacant) => {
                let shared = Arc::new(descriptor);
                vacant.insert(Arc::clone(&shared));
                shared
            }
        };

        info!(
            module = %name,
            version = %shared.version(),
            functions = shared.functions().len(),
            "Registered module"
        );

        Ok(shared)
    }

    /// Check if a module is registered.
    pub fn is_registered(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Import a registered module.
    ///
    /// # Errors
    ///
    /// Returns an error if no module with this name is registered.
    pub fn import(&self, module: &str) -> HostResult<Arc<ModuleDescriptor>> {
        let found = self
            .modules
            .get(module)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| HostError::ModuleNotFound {
                module: module.to_string(),
            })?;

        debug!(module, "Imported module");
        Ok(found)
    }

    /// Invoke an exported function with raw positional arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the module or function does not exist, or if
    /// the call fails inside the bridge.
    pub fn call(&self, module: &str, function: &str, args: &[Value]) -> HostResult<Value> {
        let descriptor = self.import(module)?;
        let binding = descriptor
            .function(function)
            .ok_or_else(|| HostError::FunctionNotFound {
                module: module.to_string(),
                function: function.to_string(),
            })?;

        Ok(binding.invoke(args)?)
    }

    /// The names of all registered modules, sorted.
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// All registered descriptors, sorted by module name.
    pub fn modules(&self) -> Vec<Arc<ModuleDescriptor>> {
        let mut modules: Vec<Arc<ModuleDescriptor>> = self
            .modules
            .iter()
            .map(|e| Arc::clone(e.value()))
            .collect();
        modules.sort_by(|a, b| a.name().cmp(b.name()));
        modules
    }

    /// The number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRegistry")
            .field("modules", &self.module_names())
            .finish()
    }
}
