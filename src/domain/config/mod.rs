pub mod boot_config;
pub mod parse;

pub use boot_config::{AppConfig, BootConfig, GatewayConfig, ServerConfig};
pub use parse::parse_config_content;
