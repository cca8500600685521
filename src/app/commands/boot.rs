//! Fail-fast execution of a boot sequence.

use tracing::info;

use crate::domain::{AppError, BootSequence};
use crate::ports::ProcessRunner;

/// Run every preparation step in order, then hand off to the server.
///
/// The first failing step ends the sequence; nothing after it runs.
pub fn execute<R: ProcessRunner>(runner: &R, sequence: &BootSequence) -> Result<(), AppError> {
    info!(sequence = sequence.name(), "starting");

    for step in sequence.prepare() {
        info!(step = %step.label, command = %step.command_line(), "running");
        runner.run(step)?;
    }

    let server = sequence.hand_off();
    info!(step = %server.label, command = %server.command_line(), "starting server");
    runner.hand_off(server)
}
