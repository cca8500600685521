//! Pure parse/validate for `entrykit.toml`.

use crate::domain::{AppError, BootConfig};

/// Parse and validate bootstrapper configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BootConfig, AppError> {
    let config: BootConfig = toml::from_str(content)
        .map_err(|err| AppError::config_error(format!("Invalid configuration: {}", err)))?;
    config.validate()?;
    Ok(config)
}
