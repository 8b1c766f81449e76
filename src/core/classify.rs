//! Operation Classification.
//!
//! A closed dispatch over `(component, name)` that decides, for each
//! operation, the start description, whether the engine blocks on a
//! resource, and how the matching end description is produced.

use crate::common::constants::{END_WORD, START_WORD};
use crate::common::{Component, Operation};

/// How an end entry follows a start entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndRule {
    /// No end entry is emitted.
    None,
    /// The end entry carries this exact text.
    Fixed(&'static str),
    /// The end entry is the start text with its first `start` replaced by `end`.
    SwapStart,
}

/// The engine-level meaning of one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    /// `S(start)`.
    SimulatorStart,
    /// `S(end)`.
    SimulatorEnd,
    /// `A(start)`.
    ProcessPrepare,
    /// `A(end)`.
    ProcessRemove,
    /// Any `P` operation.
    Processing,
    /// `I(name)`.
    Input(&'a str),
    /// `O(name)`.
    Output(&'a str),
    /// Any other component/name combination.
    Unrecognized,
}

impl<'a> Action<'a> {
    /// Classifies an operation by its component and name.
    pub fn of(op: &'a Operation) -> Self {
        match (op.component(), op.name()) {
            (Component::Simulator, "start") => Action::SimulatorStart,
            (Component::Simulator, "end") => Action::SimulatorEnd,
            (Component::Application, "start") => Action::ProcessPrepare,
            (Component::Application, "end") => Action::ProcessRemove,
            (Component::Processor, _) => Action::Processing,
            (Component::Input, name) => Action::Input(name),
            (Component::Output, name) => Action::Output(name),
            _ => Action::Unrecognized,
        }
    }

    /// Text of the entry logged when the operation begins.
    ///
    /// Output actions keep the historical `ouput` spelling so logs stay
    /// comparable with existing traces.
    pub fn description(&self) -> String {
        match self {
            Action::SimulatorStart => "Simulator program starting".to_string(),
            Action::SimulatorEnd => "Simulator program ending".to_string(),
            Action::ProcessPrepare => "OS: preparing process 1".to_string(),
            Action::ProcessRemove => "OS: removing process 1".to_string(),
            Action::Processing => "Process 1: start processing action".to_string(),
            Action::Input(name) => format!("Process 1: start {name} input"),
            Action::Output(name) => format!("Process 1: start {name} ouput"),
            Action::Unrecognized => String::new(),
        }
    }

    /// How the closing entry is produced, if there is one.
    pub fn end_rule(&self) -> EndRule {
        match self {
            Action::ProcessPrepare => EndRule::Fixed("OS: starting process 1"),
            Action::Processing | Action::Input(_) | Action::Output(_) => EndRule::SwapStart,
            Action::SimulatorStart
            | Action::SimulatorEnd
            | Action::ProcessRemove
            | Action::Unrecognized => EndRule::None,
        }
    }

    /// True when the engine stalls on a resource before the end entry.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            Action::Processing | Action::Input(_) | Action::Output(_)
        )
    }

    /// End text for a start entry, or `None` when no end entry follows.
    pub fn end_description(&self, start: &str) -> Option<String> {
        match self.end_rule() {
            EndRule::None => None,
            EndRule::Fixed(text) => Some(text.to_string()),
            EndRule::SwapStart => Some(derive_end_description(start)),
        }
    }
}

/// Replaces the first `start` in `start` with `end`, leaving the rest intact.
pub fn derive_end_description(start: &str) -> String {
    start.replacen(START_WORD, END_WORD, 1)
}
