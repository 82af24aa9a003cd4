//! Inspect command - show a registered module's metadata.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ferrule_bridge::ModuleDescriptor;

use crate::OutputFormat;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Name of the registered module
    #[arg(required = true)]
    pub module: String,
}

/// Inspection result.
#[derive(Debug, Serialize)]
struct ModuleReport {
    name: String,
    version: String,
    doc: String,
    functions: Vec<FunctionReport>,
}

#[derive(Debug, Serialize)]
struct FunctionReport {
    name: String,
    signature: String,
    doc: String,
}

impl From<&ModuleDescriptor> for ModuleReport {
    fn from(module: &ModuleDescriptor) -> Self {
        Self {
            name: module.name().to_string(),
            version: module.version().to_string(),
            doc: module.doc().to_string(),
            functions: module
                .functions()
                .iter()
                .map(|binding| FunctionReport {
                    name: binding.name().to_string(),
                    signature: binding.render(),
                    doc: binding.doc().to_string(),
                })
                .collect(),
        }
    }
}

/// Execute the inspect command.
pub fn execute(args: InspectArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let registry = super::bootstrap(config)?;

    let module = registry
        .import(&args.module)
        .with_context(|| format!("Failed to import module '{}'", args.module))?;

    let report = ModuleReport::from(module.as_ref());

    match format {
        OutputFormat::Human => {
            println!("Module: {}", report.name);
            println!("Version: {}", report.version);
            if !report.doc.is_empty() {
                println!("Doc: {}", report.doc);
            }
            println!();

            println!("Functions ({}):", report.functions.len());
            for function in &report.functions {
                if function.doc.is_empty() {
                    println!("  {}", function.signature);
                } else {
                    println!("  {} - {}", function.signature, function.doc);
                }
            }
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
