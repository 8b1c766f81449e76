//! Run statistics collection and reporting.
//!
//! Tracks how many operations of each component the engine executed, how
//! much simulated resource time they accounted for, and how long the host
//! spent on the run.

use std::time::{Duration, Instant};

use crate::common::Component;

/// Statistics for a single engine run.
///
/// Filled in by the execution engine as it consumes operations and printed
/// on demand by the binary.
#[derive(Debug, Clone)]
pub struct RunStats {
    start_time: Instant,
    host_time: Option<Duration>,

    pub operations: u64,
    pub log_entries: u64,

    pub ops_simulator: u64,
    pub ops_application: u64,
    pub ops_processor: u64,
    pub ops_input: u64,
    pub ops_output: u64,
    pub ops_unrecognized: u64,

    pub simulated_ms: u64,
}

impl Default for RunStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            host_time: None,
            operations: 0,
            log_entries: 0,
            ops_simulator: 0,
            ops_application: 0,
            ops_processor: 0,
            ops_input: 0,
            ops_output: 0,
            ops_unrecognized: 0,
            simulated_ms: 0,
        }
    }
}

impl RunStats {
    pub(crate) fn start(&mut self) {
        self.start_time = Instant::now();
        self.host_time = None;
    }

    pub(crate) fn finish(&mut self, log_entries: usize) {
        self.log_entries = log_entries as u64;
        self.host_time = Some(self.start_time.elapsed());
    }

    pub(crate) fn record_operation(
        &mut self,
        component: Component,
        unrecognized: bool,
        busy_ms: u64,
    ) {
        self.operations += 1;
        self.simulated_ms = self.simulated_ms.saturating_add(busy_ms);
        if unrecognized {
            self.ops_unrecognized += 1;
        }
        match component {
            Component::Simulator => self.ops_simulator += 1,
            Component::Application => self.ops_application += 1,
            Component::Processor => self.ops_processor += 1,
            Component::Input => self.ops_input += 1,
            Component::Output => self.ops_output += 1,
            Component::Unknown(_) => {}
        }
    }

    /// Host time spent on the run; still counting if the run is unfinished.
    pub fn host_time(&self) -> Duration {
        self.host_time.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Prints a formatted summary to stderr.
    ///
    /// Stderr keeps the summary out of the live log display on stdout.
    pub fn print(&self) {
        let seconds = self.host_time().as_secs_f64();
        let ops = if self.operations == 0 { 1 } else { self.operations };
        let simulated_seconds = self.simulated_ms as f64 / 1000.0;
        let overhead = if simulated_seconds > 0.0 {
            seconds / simulated_seconds
        } else {
            0.0
        };

        eprintln!("\n==========================================================");
        eprintln!("OS SIMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {:.4} s", seconds);
        eprintln!("sim_seconds              {:.4} s", simulated_seconds);
        eprintln!("sim_host_ratio           {:.4}", overhead);
        eprintln!("sim_ops                  {}", self.operations);
        eprintln!("sim_log_entries          {}", self.log_entries);
        eprintln!("----------------------------------------------------------");
        eprintln!("OPERATION MIX");
        let print_mix = |name: &str, count: u64| {
            eprintln!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / ops as f64) * 100.0
            );
        };
        print_mix("op.simulator", self.ops_simulator);
        print_mix("op.application", self.ops_application);
        print_mix("op.processor", self.ops_processor);
        print_mix("op.input", self.ops_input);
        print_mix("op.output", self.ops_output);
        print_mix("op.unrecognized", self.ops_unrecognized);
        eprintln!("==========================================================");
    }
}
