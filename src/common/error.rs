//! Error Types.
//!
//! Two layers: [`ParseError`] for meta-data text that cannot be turned into
//! operations, and [`SimError`] for everything that ends a run at the file
//! boundary. Conditions inside the engine never surface as errors; unknown
//! operations are absorbed by the classification and timing rules.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Meta-data text that could not be split into operations.
///
/// Positions are 1-based and refer to the input text, header line
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A component letter was not followed by `(`.
    #[error("line {line}, column {column}: expected '(' after component '{component}'")]
    MissingOpenParen {
        /// Offending component letter.
        component: char,
        /// Line of the component letter.
        line: usize,
        /// Column of the component letter.
        column: usize,
    },

    /// Input ended inside an operation name.
    #[error("line {line}, column {column}: operation name is missing its closing ')'")]
    UnterminatedName {
        /// Line of the opening parenthesis.
        line: usize,
        /// Column of the opening parenthesis.
        column: usize,
    },

    /// A character other than a digit appeared in a cycle count.
    #[error("line {line}, column {column}: unexpected '{found}' in cycle count")]
    InvalidCycleCount {
        /// The rejected character.
        found: char,
        /// Line of the rejected character.
        line: usize,
        /// Column of the rejected character.
        column: usize,
    },

    /// A cycle count does not fit in 64 bits.
    #[error("line {line}, column {column}: cycle count overflows")]
    CycleCountOverflow {
        /// Line of the overflowing digit.
        line: usize,
        /// Column of the overflowing digit.
        column: usize,
    },

    /// Input ended before the instruction's `;` or `.`.
    #[error("line {line}, column {column}: instruction is missing its ';' or '.' terminator")]
    UnterminatedInstruction {
        /// Line where the instruction began.
        line: usize,
        /// Column where the instruction began.
        column: usize,
    },
}

/// Fatal simulator errors. Each one ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration file could not be opened.
    #[error("configuration file not found: {}", path.display())]
    ConfigUnavailable {
        /// Requested path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The meta-data file could not be opened.
    #[error("meta-data file not found: {}", path.display())]
    MetaDataUnavailable {
        /// Requested path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A legacy configuration line carried an unusable value.
    #[error("invalid configuration in {} (line {line}): {reason}", path.display())]
    InvalidConfig {
        /// Configuration file path.
        path: PathBuf,
        /// 1-based line number, 0 when the problem is a missing key.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// A TOML configuration failed to deserialize.
    #[error("invalid TOML configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The meta-data text could not be parsed.
    #[error("invalid meta-data: {0}")]
    MetaData(#[from] ParseError),

    /// The finished log could not be written.
    #[error("could not write log file {}", path.display())]
    LogWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The log could not be serialized to JSON.
    #[error("could not serialize JSON log {}", path.display())]
    JsonExport {
        /// Output path.
        path: PathBuf,
        /// Underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },
}
