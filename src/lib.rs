//! Single-Process OS Simulator Library.
//!
//! This crate simulates an operating system stepping one process through
//! the operations of a meta-data program. Each operation is classified,
//! timed from per-resource cycle constants, and logged as paired start and
//! end entries on a monotonic simulation clock.
//!
//! # Architecture
//!
//! * **Parser**: turns the `component(name)cycles` meta-data language into an ordered program.
//! * **Timing**: maps an operation to simulated milliseconds from the resource timing table.
//! * **Engine**: a single sequential pass that blocks on each resource and emits log entries.
//!
//! # Modules
//!
//! * `common`: Shared types, constants, and error handling.
//! * `config`: Resource timing table loading and parsing.
//! * `core`: Classification, timing, delays, and the execution engine.
//! * `sim`: Input loaders, the meta-data parser, and log output.
//! * `stats`: Run statistics collection.

/// Shared types, constants, and error handling.
///
/// Provides the operation record produced by the parser, the error
/// taxonomy of the file boundary, and the simulator's fixed text formats.
pub mod common;

/// Resource timing table and log target configuration.
///
/// Parses the legacy `Key: value` configuration format and TOML files into
/// the cycle-time table the timing model consults.
pub mod config;

/// Execution core: classification, timing model, delays, and the engine.
pub mod core;

/// Simulation harness: input loaders, meta-data parser, and log output.
pub mod sim;

/// Run statistics collection and reporting.
pub mod stats;
