//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use aadex_core::AadexConfig;

/// Load the pipeline configuration, falling back to defaults when no
/// config file is given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<AadexConfig> {
    match config_path {
        Some(path) => Ok(AadexConfig::from_file(std::path::Path::new(path))?),
        None => Ok(AadexConfig::default()),
    }
}
