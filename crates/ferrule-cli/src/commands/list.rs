//! List command - enumerate registered modules.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::OutputFormat;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {}

/// One registered module in the listing.
#[derive(Debug, Serialize)]
struct ModuleEntry {
    name: String,
    version: String,
    functions: usize,
}

/// Execute the list command.
pub fn execute(_args: ListArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let registry = super::bootstrap(config)?;

    let entries: Vec<ModuleEntry> = registry
        .modules()
        .iter()
        .map(|module| ModuleEntry {
            name: module.name().to_string(),
            version: module.version().to_string(),
            functions: module.functions().len(),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            println!("Modules ({}):", entries.len());
            for entry in &entries {
                println!(
                    "  {} v{} ({} function{})",
                    entry.name,
                    entry.version,
                    entry.functions,
                    if entry.functions == 1 { "" } else { "s" }
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::JsonCompact => {
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
