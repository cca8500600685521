//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::{AppContext, commands, config::load_config};
use crate::domain::Environment;
use crate::services::{LocalFilesystem, ProcessCommandAdapter};

pub use crate::app::commands::plan::{Plan, PlanTarget, PlannedKind, PlannedStep};
pub use crate::app::commands::render::{RenderOptions, RenderOutcome};
pub use crate::domain::{AppError, BootConfig};

fn create_context() -> AppContext<ProcessCommandAdapter, LocalFilesystem> {
    AppContext::new(ProcessCommandAdapter::new(), LocalFilesystem::new())
}

/// Load configuration from `config_path`, or the built-in defaults.
pub fn load(config_path: Option<&Path>) -> Result<BootConfig, AppError> {
    load_config(&LocalFilesystem::new(), config_path)
}

/// Run the App Bootstrapper.
///
/// On success this replaces the current process with the application server
/// and does not return.
pub fn boot_app(config_path: Option<&Path>) -> Result<(), AppError> {
    let ctx = create_context();
    let config = load_config(ctx.filesystem(), config_path)?;
    commands::app_boot::execute(&ctx, &config.app)
}

/// Run the Gateway Bootstrapper against the current process environment.
pub fn boot_gateway(config_path: Option<&Path>) -> Result<(), AppError> {
    let ctx = create_context();
    let config = load_config(ctx.filesystem(), config_path)?;
    commands::gateway_boot::execute(&ctx, &config.gateway, &Environment::from_process())
}

/// Render a template against the current process environment.
pub fn render(options: &RenderOptions) -> Result<RenderOutcome, AppError> {
    commands::render::execute(&LocalFilesystem::new(), &Environment::from_process(), options)
}

/// Describe a bootstrapper's steps without running them.
pub fn plan(config_path: Option<&Path>, target: PlanTarget) -> Result<Plan, AppError> {
    Ok(commands::plan::execute(&load(config_path)?, target))
}

/// Write the bundled `entrykit.toml` and gateway template into `dir`.
pub fn scaffold(dir: &Path, force: bool) -> Result<Vec<PathBuf>, AppError> {
    commands::scaffold::execute(&LocalFilesystem::new(), dir, force)
}
