//! Input Loading.
//!
//! This module reads the two input files of a run, the configuration and
//! the meta-data program, and maps open failures to the fatal errors the
//! binary reports before exiting.

use std::fs;
use std::path::Path;

use super::parser::{self, MetaDataProgram};
use crate::common::SimError;
use crate::config::ResourceTimingTable;

/// Loads the resource timing table from a configuration file.
///
/// `.toml` files are read as TOML, everything else as the legacy
/// `Key: value` format.
pub fn load_config(path: &Path) -> Result<ResourceTimingTable, SimError> {
    let content = fs::read_to_string(path).map_err(|source| SimError::ConfigUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let table = ResourceTimingTable::parse(path, &content)?;
    tracing::info!(
        config = %path.display(),
        meta_data = %table.meta_data_path.display(),
        "loaded configuration"
    );
    Ok(table)
}

/// Reads and parses a meta-data program.
pub fn load_meta_data(path: &Path) -> Result<MetaDataProgram, SimError> {
    let content = fs::read_to_string(path).map_err(|source| SimError::MetaDataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parser::parse(&content)?;
    tracing::info!(
        meta_data = %path.display(),
        operations = program.len(),
        "loaded meta-data"
    );
    Ok(program)
}
