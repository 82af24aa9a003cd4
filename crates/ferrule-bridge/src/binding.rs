//! Function bindings: the glue between host calls and native functions.
//!
//! A [`FunctionBinding`] owns an exported name, a docstring, a declared
//! [`Signature`], and a type-erased handler. The `wrap*` constructors build
//! all four from an ordinary typed Rust closure, deriving the declared
//! signature from the closure's own argument and result types, so the
//! declared types and the decode behavior cannot drift apart and the
//! native closure only ever observes fully-decoded arguments.

use std::fmt;
use std::sync::Arc;

use ferrule_value::{FromValue, IntoValue, Value};

use crate::error::{CallError, CallResult};
use crate::frame::CallFrame;
use crate::signature::{Param, Signature};

/// Type-erased call handler stored inside a binding.
type Handler = Arc<dyn Fn(&CallFrame<'_>) -> CallResult<Value> + Send + Sync>;

/// An exported native function with its declared calling convention.
///
/// Bindings are created at module-registration time and immutable
/// afterwards. Each invocation is stateless: the handler decodes the
/// frame, calls the native closure, and encodes the result; nothing is
/// retained between calls, so concurrent invocations are safe as long as
/// the wrapped closure is.
#[derive(Clone)]
pub struct FunctionBinding {
    /// Exported name.
    name: String,
    /// Human-readable documentation string.
    doc: String,
    /// Declared calling convention.
    signature: Signature,
    /// The decode → call → encode pipeline.
    handler: Handler,
}

impl FunctionBinding {
    /// Wrap a nullary native function.
    pub fn wrap0<R, F>(name: impl Into<String>, doc: impl Into<String>, f: F) -> Self
    where
        R: IntoValue,
        F: Fn() -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let signature = Signature::new(Vec::new(), R::SCALAR);
        let handler = {
            let function = name.clone();
            Arc::new(move |frame: &CallFrame<'_>| {
                check_arity(&function, frame, 0)?;
                encode(&function, f())
            }) as Handler
        };
        Self {
            name,
            doc: doc.into(),
            signature,
            handler,
        }
    }

    /// Wrap a unary native function.
    pub fn wrap1<A, R, F>(
        name: impl Into<String>,
        doc: impl Into<String>,
        param: &str,
        f: F,
    ) -> Self
    where
        A: FromValue,
        R: IntoValue,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let signature = Signature::new(vec![Param::new(param, A::SCALAR)], R::SCALAR);
        let handler = {
            let function = name.clone();
            let param = param.to_string();
            Arc::new(move |frame: &CallFrame<'_>| {
                check_arity(&function, frame, 1)?;
                let a: A = decode(&function, frame, 0, &param)?;
                encode(&function, f(a))
            }) as Handler
        };
        Self {
            name,
            doc: doc.into(),
            signature,
            handler,
        }
    }

    /// Wrap a binary native function.
    pub fn wrap2<A, B, R, F>(
        name: impl Into<String>,
        doc: impl Into<String>,
        params: [&str; 2],
        f: F,
    ) -> Self
    where
        A: FromValue,
        B: FromValue,
        R: IntoValue,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let signature = Signature::new(
            vec![
                Param::new(params[0], A::SCALAR),
                Param::new(params[1], B::SCALAR),
            ],
            R::SCALAR,
        );
        let handler = {
            let function = name.clone();
            let first = params[0].to_string();
            let second = params[1].to_string();
            Arc::new(move |frame: &CallFrame<'_>| {
                check_arity(&function, frame, 2)?;
                let a: A = decode(&function, frame, 0, &first)?;
                let b: B = decode(&function, frame, 1, &second)?;
                encode(&function, f(a, b))
            }) as Handler
        };
        Self {
            name,
            doc: doc.into(),
            signature,
            handler,
        }
    }

    /// The exported name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The documentation string.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The declared calling convention.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Render the binding for introspection, e.g. `add(a: i64, b: i64) -> i64`.
    pub fn render(&self) -> String {
        self.signature.render(&self.name)
    }

    /// Invoke the binding with raw positional arguments.
    ///
    /// Arguments are decoded left to right against the declared signature,
    /// short-circuiting on the first failure; the native function runs only
    /// if every argument decoded, and its result passes through a checked
    /// encode before it reaches the caller.
    pub fn invoke(&self, args: &[Value]) -> CallResult<Value> {
        let frame = CallFrame::new(args);
        (self.handler)(&frame)
    }
}

impl fmt::Debug for FunctionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionBinding")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

fn check_arity(function: &str, frame: &CallFrame<'_>, expected: usize) -> CallResult<()> {
    frame
        .check_arity(expected)
        .map_err(|reason| CallError::BadSignature {
            function: function.to_string(),
            reason,
        })
}

fn decode<T: FromValue>(
    function: &str,
    frame: &CallFrame<'_>,
    index: usize,
    name: &str,
) -> CallResult<T> {
    frame
        .decode(index, name)
        .map_err(|reason| CallError::BadSignature {
            function: function.to_string(),
            reason,
        })
}

fn encode<R: IntoValue>(function: &str, result: R) -> CallResult<Value> {
    result
        .into_value()
        .map_err(|source| CallError::ResultEncoding {
            function: function.to_string(),
            source,
        })
}
