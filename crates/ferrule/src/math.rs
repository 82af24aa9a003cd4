//! Built-in integer arithmetic module.
//!
//! This is the payload the bridge ships with: a plain native function and
//! the registration glue that exposes it to the host runtime. The native
//! function itself knows nothing about the boundary; decoding, arity
//! checking, and result encoding all live in the binding.

use ferrule_bridge::{
    FunctionBinding, ModuleBuilder, ModuleConfig, ModuleDescriptor, RegistrationResult,
};

/// Import name of the built-in arithmetic module.
pub const MODULE_NAME: &str = "math";

/// Default documentation string for the module.
pub const MODULE_DOC: &str = "Integer arithmetic for the host runtime.";

/// Native addition.
///
/// The sum is computed in 128-bit so the addition itself is total and
/// pure; a result outside the host integer's range is rejected by the
/// bridge's checked encode step rather than wrapped or saturated.
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Build the arithmetic module's descriptor.
///
/// The version string defaults to this crate's version at build time;
/// `config` may override both it and the documentation string.
pub fn module(config: &ModuleConfig) -> RegistrationResult<ModuleDescriptor> {
    ModuleBuilder::new(MODULE_NAME)
        .doc(MODULE_DOC)
        .version(env!("CARGO_PKG_VERSION"))
        .with_config(config)
        .function(FunctionBinding::wrap2(
            "add",
            "Adds two integers.",
            ["a", "b"],
            add,
        ))?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrule_bridge::CallError;
    use ferrule_value::Value;

    fn built() -> ModuleDescriptor {
        module(&ModuleConfig::new()).unwrap()
    }

    #[test]
    fn test_add_small_values() {
        let module = built();
        let add = module.function("add").unwrap();

        assert_eq!(
            add.invoke(&[Value::Int(2), Value::Int(3)]).unwrap(),
            Value::Int(5)
        );
        assert_eq!(
            add.invoke(&[Value::Int(-10), Value::Int(10)]).unwrap(),
            Value::Int(0)
        );
    }

    #[test]
    fn test_add_overflow_is_encoding_failure() {
        let module = built();
        let add = module.function("add").unwrap();

        let err = add
            .invoke(&[Value::Int(i64::MAX), Value::Int(1)])
            .unwrap_err();
        assert!(matches!(err, CallError::ResultEncoding { .. }));

        let err = add
            .invoke(&[Value::Int(i64::MIN), Value::Int(-1)])
            .unwrap_err();
        assert!(matches!(err, CallError::ResultEncoding { .. }));

        // Extremes that still fit pass through exactly.
        assert_eq!(
            add.invoke(&[Value::Int(i64::MAX), Value::Int(0)]).unwrap(),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn test_module_metadata() {
        let module = built();

        assert_eq!(module.name(), MODULE_NAME);
        assert_eq!(module.doc(), MODULE_DOC);
        assert_eq!(module.version(), env!("CARGO_PKG_VERSION"));

        let add = module.function("add").unwrap();
        assert_eq!(add.doc(), "Adds two integers.");
        assert_eq!(add.render(), "add(a: i64, b: i64) -> i64");
    }

    #[test]
    fn test_config_overrides_metadata() {
        let config = ModuleConfig::new()
            .with_version("7.7.7")
            .with_doc("Custom doc.");
        let module = module(&config).unwrap();

        assert_eq!(module.version(), "7.7.7");
        assert_eq!(module.doc(), "Custom doc.");
    }
}
