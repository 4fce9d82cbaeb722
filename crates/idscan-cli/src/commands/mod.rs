pub mod classify;
pub mod config;
pub mod process;
pub mod replay;
pub mod serve;

use std::path::{Path, PathBuf};

use idscan_core::IdScanConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("idscan")
        .join("config.json")
}

/// Load the configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IdScanConfig> {
    if let Some(path) = config_path {
        return Ok(IdScanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(IdScanConfig::from_file(&default_path)?)
    } else {
        Ok(IdScanConfig::default())
    }
}
