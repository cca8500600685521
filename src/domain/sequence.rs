use serde::Serialize;

use super::step::{Step, StepMode};

/// Ordered preparation steps followed by exactly one hand-off.
///
/// The hand-off is held apart from the preparation steps so nothing can be
/// scheduled after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootSequence {
    name: String,
    prepare: Vec<Step>,
    hand_off: Step,
}

impl BootSequence {
    pub fn builder(name: impl Into<String>) -> BootSequenceBuilder {
        BootSequenceBuilder { name: name.into(), prepare: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prepare(&self) -> &[Step] {
        &self.prepare
    }

    pub fn hand_off(&self) -> &Step {
        &self.hand_off
    }

    /// All steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.prepare.iter().chain(std::iter::once(&self.hand_off))
    }
}

#[derive(Debug)]
pub struct BootSequenceBuilder {
    name: String,
    prepare: Vec<Step>,
}

impl BootSequenceBuilder {
    pub fn step(mut self, step: Step) -> Self {
        self.prepare.push(Step { mode: StepMode::Run, ..step });
        self
    }

    pub fn hand_off_to(self, step: Step) -> BootSequence {
        BootSequence {
            name: self.name,
            prepare: self.prepare,
            hand_off: Step { mode: StepMode::HandOff, ..step },
        }
    }
}
