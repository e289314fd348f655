//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use kongwatch_core::error::{KongwatchError, Result};

pub use schema::{ExporterConfig, ExporterSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| KongwatchError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| KongwatchError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, else fall back to defaults (listen on 8080).
/// A present-but-invalid file is still an error.
pub fn load_or_default(path: &str) -> Result<ExporterConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(ExporterConfig::default())
    }
}
