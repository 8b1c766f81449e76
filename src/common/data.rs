//! Operation Types.
//!
//! This module defines the record produced for every meta-data instruction.
//! Operations are immutable once parsed and are consumed by the execution
//! engine strictly in file order.

use std::fmt;

/// Actor classification of a meta-data instruction.
///
/// The meta-data language tags every instruction with a single letter.
/// Letters outside the known set are kept as [`Component::Unknown`] so the
/// parser never rejects them; downstream stages treat them as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Simulator lifecycle (`S`).
    Simulator,

    /// Process lifecycle (`A`).
    Application,

    /// Processor action (`P`).
    Processor,

    /// Input device action (`I`).
    Input,

    /// Output device action (`O`).
    Output,

    /// Any other component letter.
    Unknown(char),
}

impl Component {
    /// Maps a component letter to its variant.
    pub fn from_code(code: char) -> Self {
        match code {
            'S' => Component::Simulator,
            'A' => Component::Application,
            'P' => Component::Processor,
            'I' => Component::Input,
            'O' => Component::Output,
            other => Component::Unknown(other),
        }
    }

    /// Returns the component letter as written in meta-data.
    pub fn code(self) -> char {
        match self {
            Component::Simulator => 'S',
            Component::Application => 'A',
            Component::Processor => 'P',
            Component::Input => 'I',
            Component::Output => 'O',
            Component::Unknown(c) => c,
        }
    }
}

/// One parsed meta-data instruction, e.g. `I(hard drive)2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    component: Component,
    name: String,
    cycle_count: u64,
}

impl Operation {
    /// Creates an operation record.
    pub fn new(component: Component, name: impl Into<String>, cycle_count: u64) -> Self {
        Self {
            component,
            name: name.into(),
            cycle_count,
        }
    }

    /// The actor this instruction belongs to.
    pub fn component(&self) -> Component {
        self.component
    }

    /// The operation label between the parentheses.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cycle multiplier following the closing parenthesis.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}){}",
            self.component.code(),
            self.name,
            self.cycle_count
        )
    }
}
