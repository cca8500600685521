//! App Bootstrapper: wait for the database, collect static files, migrate,
//! then hand off to the application server.

use crate::app::AppContext;
use crate::domain::{AppConfig, AppError};
use crate::ports::{Filesystem, ProcessRunner};

use super::boot;

pub fn execute<R: ProcessRunner, F: Filesystem>(
    ctx: &AppContext<R, F>,
    config: &AppConfig,
) -> Result<(), AppError> {
    boot::execute(ctx.runner(), &config.sequence())
}
