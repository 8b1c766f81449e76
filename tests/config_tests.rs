//! Integration tests for configuration parsing.

use std::path::{Path, PathBuf};

use os_sim::common::SimError;
use os_sim::config::{LogTarget, ResourceTimingTable};
use os_sim::core::timing::Resource;
use rstest::rstest;

const LEGACY: &str = "\
Start Simulator Configuration File
Version/Phase: 1.0
File Path: Test_1.mdf
Processor cycle time (msec): 10
Monitor display time (msec): 20
Hard drive cycle time (msec): 15
Printer cycle time (msec): 25
Keyboard cycle time (msec): 50
Log: Log to Both
Log File Path: logfile_1.lgf
End Simulator Configuration File
";

/// Tests a complete legacy configuration.
#[test]
fn test_legacy_config() {
    let table = ResourceTimingTable::from_legacy_str(Path::new("config_1.cnf"), LEGACY).unwrap();

    assert_eq!(table.version.as_deref(), Some("1.0"));
    assert_eq!(table.meta_data_path, PathBuf::from("Test_1.mdf"));
    assert_eq!(table.log_path, PathBuf::from("logfile_1.lgf"));
    assert_eq!(table.log_target, LogTarget::Both);
    assert_eq!(table.cycle_time(Resource::Processor), 10);
    assert_eq!(table.cycle_time(Resource::Monitor), 20);
    assert_eq!(table.cycle_time(Resource::HardDrive), 15);
    assert_eq!(table.cycle_time(Resource::Printer), 25);
    assert_eq!(table.cycle_time(Resource::Keyboard), 50);
}

/// Tests that missing cycle times default to zero and unknown keys are ignored.
#[test]
fn test_legacy_config_defaults() {
    let text = "File Path: program.mdf\nFan speed (rpm): 1200\n\nProcessor cycle time (msec): 7\n";
    let table = ResourceTimingTable::from_legacy_str(Path::new("c.cnf"), text).unwrap();

    assert_eq!(table.processor_cycle_time, 7);
    assert_eq!(table.monitor_display_time, 0);
    assert_eq!(table.keyboard_cycle_time, 0);
    assert_eq!(table.log_path, PathBuf::from("logfile.lgf"));
    assert_eq!(table.log_target, LogTarget::Both);
}

/// Tests the accepted log target spellings.
#[rstest]
#[case("Log to Both", Some(LogTarget::Both))]
#[case("Log to Monitor", Some(LogTarget::Monitor))]
#[case("Log to File", Some(LogTarget::File))]
#[case("log to file", None)]
#[case("File", Some(LogTarget::File))]
#[case("Log to Printer", None)]
fn test_log_target_from_legacy(#[case] value: &str, #[case] expected: Option<LogTarget>) {
    assert_eq!(LogTarget::from_legacy(value), expected);
}

/// Tests which outputs each log target enables.
#[test]
fn test_log_target_outputs() {
    assert!(LogTarget::Both.shows_monitor() && LogTarget::Both.writes_file());
    assert!(LogTarget::Monitor.shows_monitor() && !LogTarget::Monitor.writes_file());
    assert!(!LogTarget::File.shows_monitor() && LogTarget::File.writes_file());
}

/// Tests that a non-numeric cycle time is rejected with its line number.
#[test]
fn test_legacy_config_bad_cycle_time() {
    let text = "File Path: p.mdf\nPrinter cycle time (msec): fast\n";
    let err = ResourceTimingTable::from_legacy_str(Path::new("c.cnf"), text).unwrap_err();

    match err {
        SimError::InvalidConfig { line, reason, .. } => {
            assert_eq!(line, 2);
            assert!(reason.contains("fast"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Tests that a configuration without a meta-data path is rejected.
#[test]
fn test_legacy_config_missing_meta_data_path() {
    let err = ResourceTimingTable::from_legacy_str(Path::new("c.cnf"), "Processor cycle time (msec): 1\n")
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig { line: 0, .. }));
}

/// Tests the TOML form of the configuration.
#[test]
fn test_toml_config() {
    let text = r#"
        version = "2.0"
        processor_cycle_time = 10
        hard_drive_cycle_time = 15
        meta_data_path = "program.mdf"
        log_target = "monitor"
    "#;
    let table = ResourceTimingTable::parse(Path::new("sim.toml"), text).unwrap();

    assert_eq!(table.version.as_deref(), Some("2.0"));
    assert_eq!(table.processor_cycle_time, 10);
    assert_eq!(table.hard_drive_cycle_time, 15);
    assert_eq!(table.printer_cycle_time, 0);
    assert_eq!(table.meta_data_path, PathBuf::from("program.mdf"));
    assert_eq!(table.log_path, PathBuf::from("logfile.lgf"));
    assert_eq!(table.log_target, LogTarget::Monitor);
}

/// Tests that TOML errors surface as configuration parse errors.
#[test]
fn test_toml_config_invalid() {
    let err = ResourceTimingTable::parse(Path::new("sim.toml"), "processor_cycle_time = -3\n")
        .unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)));
}

/// Tests that format selection follows the file extension.
#[test]
fn test_format_chosen_by_extension() {
    let table = ResourceTimingTable::parse(Path::new("config.cnf"), LEGACY).unwrap();
    assert_eq!(table.processor_cycle_time, 10);

    assert!(ResourceTimingTable::parse(Path::new("config.TOML"), LEGACY).is_err());
}
