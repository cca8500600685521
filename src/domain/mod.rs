pub mod config;
pub mod environment;
pub mod error;
pub mod sequence;
pub mod step;
pub mod template;

pub use config::{AppConfig, BootConfig, GatewayConfig, ServerConfig};
pub use environment::Environment;
pub use error::AppError;
pub use sequence::{BootSequence, BootSequenceBuilder};
pub use step::{Step, StepMode};
pub use template::{TemplateRenderer, VariableFilter};
