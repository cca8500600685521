//! Bootstrapper configuration loading.

use std::path::Path;

use tracing::debug;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, BootConfig};
use crate::ports::Filesystem;

/// Load `entrykit.toml` from `path`, or the built-in defaults when no path is given.
pub fn load_config<F: Filesystem>(
    filesystem: &F,
    path: Option<&Path>,
) -> Result<BootConfig, AppError> {
    let Some(path) = path else {
        debug!("no config file given, using built-in defaults");
        return Ok(BootConfig::default());
    };

    let content = filesystem.read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), err))
    })?;
    debug!(path = %path.display(), "loaded config");
    parse_config_content(&content)
}
