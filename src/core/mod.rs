//! Execution core.
//!
//! The timing model, the operation classifier, the blocking delay and the
//! execution engine that ties them together.

/// Operation classification and end-entry derivation.
pub mod classify;

/// Resource blocking delays.
pub mod delay;

/// The single-pass execution engine.
pub mod engine;

/// Operation to duration mapping.
pub mod timing;

pub use engine::{EngineState, ExecutionEngine};
