//! Gateway Bootstrapper: render the nginx configuration, then hand off to
//! nginx in the foreground.

use crate::app::AppContext;
use crate::domain::{AppError, BootSequence, Environment, GatewayConfig, VariableFilter};
use crate::ports::{Filesystem, ProcessRunner};

use super::{boot, render};

pub fn execute<R: ProcessRunner, F: Filesystem>(
    ctx: &AppContext<R, F>,
    config: &GatewayConfig,
    env: &Environment,
) -> Result<(), AppError> {
    let filter = VariableFilter::from_names(config.variables.iter().cloned());
    let rendered = render::render_template(ctx.filesystem(), env, &config.template, filter)?;
    render::write_rendered(ctx.filesystem(), &config.output, &rendered)?;

    boot::execute(ctx.runner(), &sequence(config))
}

/// The process steps that follow rendering.
pub fn sequence(config: &GatewayConfig) -> BootSequence {
    BootSequence::builder("gateway").hand_off_to(config.server_step())
}
