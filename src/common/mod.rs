//! Common types used throughout the OS simulator.
//!
//! This module provides the fundamental operation record produced by the
//! meta-data parser, the error taxonomy shared by the loaders and the
//! binary, and the constants that fix the simulator's text formats.

/// Common constants used throughout the simulator.
pub mod constants;

/// Component codes and the parsed operation record.
pub mod data;

/// Error types for the file boundary and the meta-data parser.
pub mod error;

pub use data::{Component, Operation};
pub use error::{ParseError, SimError};
