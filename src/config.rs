use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::constants::{
    CONFIG_FOOTER, CONFIG_HEADER, KEY_HARD_DRIVE, KEY_KEYBOARD, KEY_LOG_PATH, KEY_LOG_TARGET,
    KEY_META_DATA_PATH, KEY_MONITOR, KEY_PRINTER, KEY_PROCESSOR, KEY_VERSION,
};
use crate::common::SimError;
use crate::core::timing::Resource;

const DEFAULT_LOG_PATH: &str = "logfile.lgf";

/// Where the finished log goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Live display only.
    Monitor,
    /// Log file only.
    File,
    /// Live display and log file.
    #[default]
    Both,
}

impl LogTarget {
    /// Parses the value of a legacy `Log:` line, e.g. `Log to Both`.
    pub fn from_legacy(value: &str) -> Option<Self> {
        let target = value
            .trim()
            .strip_prefix("Log to")
            .unwrap_or(value)
            .trim()
            .to_ascii_lowercase();
        match target.as_str() {
            "monitor" => Some(LogTarget::Monitor),
            "file" => Some(LogTarget::File),
            "both" => Some(LogTarget::Both),
            _ => None,
        }
    }

    pub fn shows_monitor(self) -> bool {
        matches!(self, LogTarget::Monitor | LogTarget::Both)
    }

    pub fn writes_file(self) -> bool {
        matches!(self, LogTarget::File | LogTarget::Both)
    }
}

/// Per-resource cycle times and the run's file paths.
///
/// Cycle times are milliseconds per cycle. The table is read-only once
/// loaded; the timing model consults it for every resource action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceTimingTable {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub processor_cycle_time: u64,

    #[serde(default)]
    pub monitor_display_time: u64,

    #[serde(default)]
    pub hard_drive_cycle_time: u64,

    #[serde(default)]
    pub printer_cycle_time: u64,

    #[serde(default)]
    pub keyboard_cycle_time: u64,

    pub meta_data_path: PathBuf,

    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    #[serde(default)]
    pub log_target: LogTarget,
}

impl Default for ResourceTimingTable {
    fn default() -> Self {
        Self {
            version: None,
            processor_cycle_time: 0,
            monitor_display_time: 0,
            hard_drive_cycle_time: 0,
            printer_cycle_time: 0,
            keyboard_cycle_time: 0,
            meta_data_path: PathBuf::new(),
            log_path: default_log_path(),
            log_target: LogTarget::default(),
        }
    }
}

impl ResourceTimingTable {
    /// Milliseconds per cycle for a resource.
    pub fn cycle_time(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Processor => self.processor_cycle_time,
            Resource::HardDrive => self.hard_drive_cycle_time,
            Resource::Keyboard => self.keyboard_cycle_time,
            Resource::Monitor => self.monitor_display_time,
            Resource::Printer => self.printer_cycle_time,
        }
    }

    /// Parses configuration text, choosing the format from the file extension.
    ///
    /// `.toml` files are deserialized with serde; anything else is read as the
    /// legacy `Key: value` format.
    pub fn parse(path: &Path, content: &str) -> Result<Self, SimError> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(content)
        } else {
            Self::from_legacy_str(path, content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads the legacy line format.
    ///
    /// Bracket lines, blank lines, lines without a `:` and unknown keys are
    /// skipped. Cycle times that are absent stay at zero.
    pub fn from_legacy_str(path: &Path, content: &str) -> Result<Self, SimError> {
        let mut table = ResourceTimingTable::default();
        let mut meta_data_path = None;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(CONFIG_HEADER) || line.starts_with(CONFIG_FOOTER)
            {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                tracing::debug!(line = line_no, text = line, "skipping configuration line");
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            let invalid = |reason: String| SimError::InvalidConfig {
                path: path.to_path_buf(),
                line: line_no,
                reason,
            };
            let cycle_time = || {
                value.parse::<u64>().map_err(|_| {
                    invalid(format!(
                        "'{key}' expects a non-negative integer, found '{value}'"
                    ))
                })
            };

            match key {
                KEY_VERSION => table.version = Some(value.to_string()),
                KEY_META_DATA_PATH => meta_data_path = Some(PathBuf::from(value)),
                KEY_LOG_PATH => table.log_path = PathBuf::from(value),
                KEY_PROCESSOR => table.processor_cycle_time = cycle_time()?,
                KEY_MONITOR => table.monitor_display_time = cycle_time()?,
                KEY_HARD_DRIVE => table.hard_drive_cycle_time = cycle_time()?,
                KEY_PRINTER => table.printer_cycle_time = cycle_time()?,
                KEY_KEYBOARD => table.keyboard_cycle_time = cycle_time()?,
                KEY_LOG_TARGET => {
                    table.log_target = LogTarget::from_legacy(value)
                        .ok_or_else(|| invalid(format!("unknown log target '{value}'")))?;
                }
                _ => tracing::debug!(line = line_no, key, "ignoring unknown configuration key"),
            }
        }

        table.meta_data_path = meta_data_path.ok_or_else(|| SimError::InvalidConfig {
            path: path.to_path_buf(),
            line: 0,
            reason: format!("missing '{KEY_META_DATA_PATH}' entry"),
        })?;

        Ok(table)
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}
