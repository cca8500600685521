//! Describe what a bootstrapper would do without running anything.

use std::fmt;

use serde::Serialize;

use crate::domain::{AppError, BootConfig, BootSequence, StepMode};

use super::gateway_boot;

/// Which bootstrapper to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTarget {
    App,
    Gateway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedKind {
    /// In-process template rendering.
    Render,
    Run,
    HandOff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub label: String,
    pub kind: PlannedKind,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub bootstrapper: String,
    pub steps: Vec<PlannedStep>,
}

impl Plan {
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Internal(format!("Failed to serialize plan: {}", e)))
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.bootstrapper)?;
        for (index, step) in self.steps.iter().enumerate() {
            let marker = match step.kind {
                PlannedKind::HandOff => " (hand-off)",
                _ => "",
            };
            writeln!(f, "  {}. {}{}: {}", index + 1, step.label, marker, step.command)?;
        }
        Ok(())
    }
}

pub fn execute(config: &BootConfig, target: PlanTarget) -> Plan {
    match target {
        PlanTarget::App => from_sequence(&config.app.sequence(), Vec::new()),
        PlanTarget::Gateway => {
            let gateway = &config.gateway;
            let render = PlannedStep {
                label: "render-config".to_string(),
                kind: PlannedKind::Render,
                command: format!("{} > {}", gateway.template.display(), gateway.output.display()),
            };
            from_sequence(&gateway_boot::sequence(gateway), vec![render])
        }
    }
}

fn from_sequence(sequence: &BootSequence, mut steps: Vec<PlannedStep>) -> Plan {
    steps.extend(sequence.steps().map(|step| PlannedStep {
        label: step.label.clone(),
        kind: match step.mode {
            StepMode::Run => PlannedKind::Run,
            StepMode::HandOff => PlannedKind::HandOff,
        },
        command: step.command_line(),
    }));
    Plan { bootstrapper: sequence.name().to_string(), steps }
}
