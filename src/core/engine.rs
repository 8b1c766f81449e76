//! Execution Engine.
//!
//! Walks a parsed program once, in file order. For every operation it
//! samples the simulation clock, logs the start entry, stalls on the
//! operation's resource, and logs the end entry when the classification
//! asks for one. The engine owns the clock, the log buffer and the run
//! statistics for exactly one run.

use std::time::Instant;

use super::classify::Action;
use super::delay::{Delay, SpinDelay};
use super::timing;
use crate::common::Operation;
use crate::config::ResourceTimingTable;
use crate::sim::log::{ConsoleDisplay, LogDisplay, LogEntry};
use crate::sim::parser::MetaDataProgram;
use crate::stats::RunStats;

/// Where the engine is in its single pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No operation has run yet; the clock has not started.
    Idle,
    /// `next` is the index of the operation the next step executes.
    Processing { next: usize },
    /// Every operation has been consumed.
    Done,
}

/// Single-pass interpreter for one meta-data program.
///
/// Built idle with [`ExecutionEngine::new`], then driven by [`step`](Self::step)
/// or [`run`](Self::run). The stall and the live display are replaced with
/// [`with_delay`](Self::with_delay) and [`with_display`](Self::with_display).
pub struct ExecutionEngine<'a> {
    operations: Vec<Operation>,
    table: ResourceTimingTable,
    delay: Box<dyn Delay + 'a>,
    display: Box<dyn LogDisplay + 'a>,
    state: EngineState,
    started: Instant,
    log: Vec<LogEntry>,
    stats: RunStats,
}

impl<'a> ExecutionEngine<'a> {
    /// Creates an idle engine that spins for real and prints to stdout.
    pub fn new(program: MetaDataProgram, table: ResourceTimingTable) -> Self {
        Self {
            operations: program.into_operations(),
            table,
            delay: Box::new(SpinDelay::new()),
            display: Box::new(ConsoleDisplay::new()),
            state: EngineState::Idle,
            started: Instant::now(),
            log: Vec::new(),
            stats: RunStats::default(),
        }
    }

    pub fn with_delay(mut self, delay: impl Delay + 'a) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn with_display(mut self, display: impl LogDisplay + 'a) -> Self {
        self.display = Box::new(display);
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Entries produced so far, in emission order.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn into_log(self) -> Vec<LogEntry> {
        self.log
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Executes one operation.
    ///
    /// Returns `false` once the program is exhausted; the engine is then
    /// `Done` and further calls do nothing.
    pub fn step(&mut self) -> bool {
        let index = match self.state {
            EngineState::Idle => {
                self.started = Instant::now();
                self.stats.start();
                0
            }
            EngineState::Processing { next } => next,
            EngineState::Done => return false,
        };

        let Some(op) = self.operations.get(index) else {
            self.state = EngineState::Done;
            self.stats.finish(self.log.len());
            tracing::debug!(entries = self.log.len(), "program finished");
            return false;
        };

        let action = Action::of(op);
        tracing::debug!(index, operation = %op, "executing operation");

        let start_time = self.started.elapsed().as_secs_f64();
        let description = action.description();
        if action == Action::Unrecognized {
            tracing::warn!(operation = %op, "unrecognized operation logged without description");
        }
        let end_description = action.end_description(&description);
        let start_entry = LogEntry::new(start_time, description);
        self.display.show(&start_entry);
        self.log.push(start_entry);

        let busy_ms = if action.is_blocking() {
            timing::duration_ms(op, &self.table)
        } else {
            0
        };
        if busy_ms > 0 {
            tracing::trace!(busy_ms, "resource busy");
            self.delay.block(busy_ms);
        }

        if let Some(end_description) = end_description {
            let end_entry = LogEntry::new(self.started.elapsed().as_secs_f64(), end_description);
            self.display.show(&end_entry);
            self.log.push(end_entry);
        }

        self.stats
            .record_operation(op.component(), action == Action::Unrecognized, busy_ms);
        self.state = EngineState::Processing { next: index + 1 };
        true
    }

    /// Runs the remaining operations to completion.
    pub fn run(&mut self) -> &[LogEntry] {
        while self.step() {}
        &self.log
    }
}
