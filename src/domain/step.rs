use std::fmt;

use serde::Serialize;

/// How a step's process relates to the bootstrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Run to completion; a non-zero exit aborts the sequence.
    Run,
    /// Replace the bootstrapper with this process.
    HandOff,
}

/// A labelled external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub mode: StepMode,
}

impl Step {
    pub fn run<L, P, I, A>(label: L, program: P, args: I) -> Self
    where
        L: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            label: label.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            mode: StepMode::Run,
        }
    }

    pub fn hand_off<L, P, I, A>(label: L, program: P, args: I) -> Self
    where
        L: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self { mode: StepMode::HandOff, ..Self::run(label, program, args) }
    }

    /// Shell-style rendering of the command line, for logs and plans.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.command_line())
    }
}

fn quote_word(word: &str) -> String {
    let plain = !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+".contains(c));
    if plain { word.to_string() } else { format!("'{}'", word.replace('\'', r"'\''")) }
}
