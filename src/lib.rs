//! entrykit: container entrypoint bootstrapper.
//!
//! Two fail-fast startup sequences: the app bootstrapper (wait for the
//! database, collect static files, migrate, hand off to uWSGI) and the
//! gateway bootstrapper (render the nginx configuration from the
//! environment, hand off to nginx in the foreground).

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    AppError, BootConfig, Plan, PlanTarget, PlannedKind, PlannedStep, RenderOptions,
    RenderOutcome, boot_app, boot_gateway, load, plan, render, scaffold,
};
pub use domain::{Environment, TemplateRenderer, VariableFilter};
