use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use crate::domain::{AppError, Step};
use crate::ports::ProcessRunner;

/// Records every step it is asked to run; fails the ones it is told to.
#[derive(Default)]
pub struct FakeRunner {
    pub invoked: Mutex<Vec<Step>>,
    failures: Mutex<HashMap<String, i32>>,
    missing_programs: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the step with `label` exit with `code`.
    pub fn fail_step(self, label: &str, code: i32) -> Self {
        self.failures.lock().unwrap().insert(label.to_string(), code);
        self
    }

    /// Make `program` behave as if it is not installed.
    pub fn missing_program(self, program: &str) -> Self {
        self.missing_programs.lock().unwrap().push(program.to_string());
        self
    }

    pub fn invoked_labels(&self) -> Vec<String> {
        self.invoked.lock().unwrap().iter().map(|s| s.label.clone()).collect()
    }

    fn record(&self, step: &Step) -> Result<(), AppError> {
        self.invoked.lock().unwrap().push(step.clone());

        if self.missing_programs.lock().unwrap().contains(&step.program) {
            return Err(AppError::Spawn {
                program: step.program.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        if let Some(code) = self.failures.lock().unwrap().get(&step.label) {
            return Err(AppError::StepFailed { step: step.label.clone(), code: *code });
        }
        Ok(())
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, step: &Step) -> Result<(), AppError> {
        self.record(step)
    }

    fn hand_off(&self, step: &Step) -> Result<(), AppError> {
        self.record(step)
    }
}
