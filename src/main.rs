//! Single-Process OS Simulator CLI.
//!
//! The main executable for the simulator. It loads the configuration and
//! the meta-data program it names, runs the execution engine over the
//! program, and persists the activity log.
//!
//! # Usage
//!
//! ```text
//! os-sim config.cnf
//! os-sim config.toml --no-delay --json run.json --stats
//! ```
//!
//! Log lines stream to stdout as the run progresses. Diagnostics and the
//! optional statistics summary go to stderr, so stdout stays identical to
//! the log file.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use os_sim::common::SimError;
use os_sim::core::delay::{NoDelay, SpinDelay};
use os_sim::core::ExecutionEngine;
use os_sim::sim::loader;
use os_sim::sim::log::{self, ConsoleDisplay, SilentDisplay};

/// Command-line arguments for the OS simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Single-Process OS Simulator")]
struct Args {
    /// Simulator configuration file (legacy `Key: value` text or `.toml`).
    config: PathBuf,

    /// Skip resource delays; timestamps then reflect host overhead only.
    #[arg(long)]
    no_delay: bool,

    /// Real seconds spent per simulated second of resource time.
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Overrides the log file path from the configuration.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Also exports the log as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Prints run statistics to stderr when the run completes.
    #[arg(long)]
    stats: bool,
}

/// Main entry point for the OS simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the resource timing table named on the command line.
/// 2. **Loader**: Reads and parses the meta-data program the configuration points to.
/// 3. **Simulation**: Runs the engine once over the program, streaming log lines.
/// 4. **Teardown**: Writes the log file (and JSON export), optionally prints statistics.
///
/// Any failure to read an input or write an output exits with code 1.
fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("[!] FATAL: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("    caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let default_filter = if cfg!(feature = "always-trace") {
        "os_sim=trace"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), SimError> {
    let mut table = loader::load_config(&args.config)?;
    if let Some(path) = &args.log_file {
        table.log_path = path.clone();
    }

    let program = loader::load_meta_data(&table.meta_data_path)?;
    let target = table.log_target;
    let log_path = table.log_path.clone();

    let engine = ExecutionEngine::new(program, table);
    let engine = if args.no_delay {
        engine.with_delay(NoDelay)
    } else {
        engine.with_delay(SpinDelay::with_scale(args.time_scale))
    };
    let mut engine = if target.shows_monitor() {
        engine.with_display(ConsoleDisplay::new())
    } else {
        engine.with_display(SilentDisplay)
    };

    engine.run();

    if target.writes_file() {
        log::write_log_file(&log_path, engine.log())?;
        tracing::info!(path = %log_path.display(), "log written");
    }
    if let Some(path) = &args.json {
        log::write_json(path, engine.log())?;
    }
    if args.stats {
        engine.stats().print();
    }

    Ok(())
}
