//! Simulation input and output.
//!
//! Everything on the file side of a run: loading the configuration and the
//! meta-data program, parsing the meta-data language, and rendering the
//! activity log to the live display, the log file and JSON.

/// Configuration and meta-data file loading.
pub mod loader;

/// Log entries, live displays and log writers.
pub mod log;

/// Meta-data language parser.
pub mod parser;

pub use log::LogEntry;
pub use parser::{parse, MetaDataProgram};
