use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::domain::{AppError, Step};
use crate::ports::ProcessRunner;

/// Runs steps with `std::process::Command`, inheriting stdio and environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandAdapter;

impl ProcessCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn command(step: &Step) -> Command {
        let mut command = Command::new(&step.program);
        command.args(&step.args);
        command
    }

    fn spawn_error(step: &Step, source: std::io::Error) -> AppError {
        AppError::Spawn { program: step.program.clone(), source }
    }
}

impl ProcessRunner for ProcessCommandAdapter {
    fn run(&self, step: &Step) -> Result<(), AppError> {
        let status = Self::command(step).status().map_err(|e| Self::spawn_error(step, e))?;

        if !status.success() {
            return Err(AppError::StepFailed { step: step.label.clone(), code: exit_code(status) });
        }

        debug!(step = %step.label, "step completed");
        Ok(())
    }

    #[cfg(unix)]
    fn hand_off(&self, step: &Step) -> Result<(), AppError> {
        use std::os::unix::process::CommandExt;

        // exec only returns on failure.
        let err = Self::command(step).exec();
        Err(Self::spawn_error(step, err))
    }

    #[cfg(not(unix))]
    fn hand_off(&self, step: &Step) -> Result<(), AppError> {
        self.run(step)
    }
}

/// Shell-compatible exit code: the child's code, or 128 + signal number.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
