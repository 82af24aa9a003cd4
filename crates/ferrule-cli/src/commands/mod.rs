//! CLI subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use ferrule_bridge::ModuleConfig;
use ferrule_host::HostRegistry;

pub mod call;
pub mod inspect;
pub mod list;

/// Build the host registry the commands operate on, applying an optional
/// configuration file.
pub(crate) fn bootstrap(config_path: Option<&Path>) -> Result<HostRegistry> {
    let config = match config_path {
        Some(path) => ModuleConfig::load(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => ModuleConfig::new(),
    };

    debug!(configured = config_path.is_some(), "Bootstrapping host");

    ferrule::bootstrap_host(&config).context("Failed to bootstrap host registry")
}
