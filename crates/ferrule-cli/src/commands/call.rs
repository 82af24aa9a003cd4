//! Call command - invoke an exported function as a dynamic caller.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use ferrule_value::Value;

use crate::OutputFormat;

/// Arguments for the call command.
#[derive(Args)]
pub struct CallArgs {
    /// Name of the registered module
    #[arg(required = true)]
    pub module: String,

    /// Name of the exported function
    #[arg(required = true)]
    pub function: String,

    /// Positional arguments, parsed as JSON scalars
    ///
    /// Unquoted words that are not valid JSON are passed through as
    /// strings, so `ferrule call math add 2 3` and
    /// `ferrule call math add '"x"' 3` both do what they look like.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Call result for JSON output.
#[derive(Debug, Serialize)]
struct CallReport {
    module: String,
    function: String,
    result: Value,
}

/// Parse one command-line argument into a dynamic value.
///
/// Accepts any JSON scalar (`null`, booleans, numbers, strings); text
/// that is not valid JSON is treated as a bare string. Arrays and
/// objects are rejected since the bridge only carries scalars.
fn parse_arg(raw: &str) -> Result<Value> {
    let parsed = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => json,
        Err(_) => return Ok(Value::Str(raw.to_string())),
    };

    match parsed {
        serde_json::Value::Null => Ok(Value::Unit),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(x) = n.as_f64() {
                Ok(Value::Float(x))
            } else {
                bail!("unsupported number: {}", n)
            }
        }
        serde_json::Value::String(s) => Ok(Value::Str(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            bail!("unsupported argument '{}': only scalars cross the bridge", raw)
        }
    }
}

/// Execute the call command.
pub fn execute(args: CallArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let registry = super::bootstrap(config)?;

    let values = args
        .args
        .iter()
        .map(|raw| parse_arg(raw))
        .collect::<Result<Vec<Value>>>()?;

    let result = registry
        .call(&args.module, &args.function, &values)
        .with_context(|| format!("Call to '{}::{}' failed", args.module, args.function))?;

    let report = CallReport {
        module: args.module,
        function: args.function,
        result,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", report.result);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::JsonCompact => {
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_scalars() {
        assert_eq!(parse_arg("2").unwrap(), Value::Int(2));
        assert_eq!(parse_arg("-10").unwrap(), Value::Int(-10));
        assert_eq!(parse_arg("2.5").unwrap(), Value::Float(2.5));
        assert_eq!(parse_arg("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_arg("null").unwrap(), Value::Unit);
        assert_eq!(parse_arg("\"x\"").unwrap(), Value::Str("x".to_string()));
    }

    #[test]
    fn test_bare_words_become_strings() {
        assert_eq!(parse_arg("x").unwrap(), Value::Str("x".to_string()));
        assert_eq!(parse_arg("1x2").unwrap(), Value::Str("1x2".to_string()));
    }

    #[test]
    fn test_composites_rejected() {
        assert!(parse_arg("[1, 2]").is_err());
        assert!(parse_arg("{\"a\": 1}").is_err());
    }
}
