//! Declared calling conventions for function bindings.
//!
//! A [`Signature`] is fixed at binding time: a fixed arity, a declared
//! scalar type per positional parameter, and a declared result type. The
//! decode step enforces it exactly; parameter names exist only for
//! introspection and diagnostics (the bridge is positional-only).

use std::fmt;

use serde::Serialize;

use ferrule_value::ScalarType;

/// A named parameter in a declared signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Parameter name, shown in rendered signatures and errors.
    pub name: String,
    /// Declared native type.
    pub ty: ScalarType,
}

impl Param {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// The declared calling convention of a function binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// Ordered positional parameters.
    params: Vec<Param>,
    /// Declared result type.
    result: ScalarType,
}

impl Signature {
    /// Create a new signature.
    pub fn new(params: Vec<Param>, result: ScalarType) -> Self {
        Self { params, result }
    }

    /// The declared number of positional arguments.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The ordered positional parameters.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The parameter at `index`, if declared.
    pub fn param(&self, index: usize) -> Option<&Param> {
        self.params.get(index)
    }

    /// The declared result type.
    pub fn result(&self) -> ScalarType {
        self.result
    }

    /// Render this signature for introspection, e.g. `add(a: i64, b: i64) -> i64`.
    pub fn render(&self, function: &str) -> String {
        let params = self
            .params
            .iter()
            .map(Param::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) -> {}", function, params, self.result)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|p| p.ty.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({}) -> {}", params, self.result)
    }
}
