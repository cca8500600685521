//! External process execution.

use crate::domain::{AppError, Step};

/// Port for running boot steps as child processes.
pub trait ProcessRunner {
    /// Run a step to completion.
    ///
    /// Returns `AppError::StepFailed` carrying the child's exit code when it
    /// exits unsuccessfully, or `AppError::Spawn` when it cannot start.
    fn run(&self, step: &Step) -> Result<(), AppError>;

    /// Replace the current process with the step's program.
    ///
    /// On success the real implementation never returns; an `Err` means the
    /// program could not be started.
    fn hand_off(&self, step: &Step) -> Result<(), AppError>;
}
