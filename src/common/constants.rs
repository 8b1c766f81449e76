//! Simulator-wide constants.
//!
//! Marker lines, configuration keys and display literals live here so the
//! parser, the config loader and the classifier agree on the exact text.

/// Prefix of the header line that opens a meta-data file.
pub const META_DATA_HEADER: &str = "Start Program Meta-Data Code";

/// Prefix of the footer line that closes a meta-data file.
pub const META_DATA_FOOTER: &str = "End Program Meta-Data Code";

/// Header line of the legacy configuration format.
pub const CONFIG_HEADER: &str = "Start Simulator Configuration File";

/// Footer line of the legacy configuration format.
pub const CONFIG_FOOTER: &str = "End Simulator Configuration File";

/// Legacy configuration key for the format version.
pub const KEY_VERSION: &str = "Version/Phase";
/// Legacy configuration key for the meta-data input path.
pub const KEY_META_DATA_PATH: &str = "File Path";
/// Legacy configuration key for the processor cycle time.
pub const KEY_PROCESSOR: &str = "Processor cycle time (msec)";
/// Legacy configuration key for the monitor display time.
pub const KEY_MONITOR: &str = "Monitor display time (msec)";
/// Legacy configuration key for the hard drive cycle time.
pub const KEY_HARD_DRIVE: &str = "Hard drive cycle time (msec)";
/// Legacy configuration key for the printer cycle time.
pub const KEY_PRINTER: &str = "Printer cycle time (msec)";
/// Legacy configuration key for the keyboard cycle time.
pub const KEY_KEYBOARD: &str = "Keyboard cycle time (msec)";
/// Legacy configuration key for the log target.
pub const KEY_LOG_TARGET: &str = "Log";
/// Legacy configuration key for the log output path.
pub const KEY_LOG_PATH: &str = "Log File Path";

/// Fractional digits rendered for a log entry timestamp.
pub const TIMESTAMP_PRECISION: usize = 6;

/// Word replaced when deriving an end description from a start description.
pub const START_WORD: &str = "start";

/// Replacement for [`START_WORD`] in derived end descriptions.
pub const END_WORD: &str = "end";
