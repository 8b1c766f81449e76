//! Integration tests for input loading and log output.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use os_sim::common::SimError;
use os_sim::sim::loader::{load_config, load_meta_data};
use os_sim::sim::log::{render, write_json, write_log_file, ConsoleDisplay, LogDisplay, LogEntry};

/// Writer whose every write fails, like a closed pipe.
struct BrokenPipe {
    attempts: usize,
}

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn create_temp_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Tests loading a legacy configuration from disk.
#[test]
fn test_load_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = create_temp_file(
        temp_dir.path(),
        "config.cnf",
        "File Path: prog.mdf\nProcessor cycle time (msec): 12\n",
    );

    let table = load_config(&path).unwrap();
    assert_eq!(table.processor_cycle_time, 12);
}

/// Tests that a missing configuration file is reported as unavailable.
#[test]
fn test_load_config_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("absent.cnf");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, SimError::ConfigUnavailable { .. }));
    assert!(err.to_string().contains("absent.cnf"));
}

/// Tests loading a meta-data program from disk.
#[test]
fn test_load_meta_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = create_temp_file(
        temp_dir.path(),
        "prog.mdf",
        "Start Program Meta-Data Code:\nS(start)0; P(run)4; S(end)0.\nEnd Program Meta-Data Code.\n",
    );

    let program = load_meta_data(&path).unwrap();
    assert_eq!(program.len(), 3);
}

/// Tests that a missing meta-data file is reported as unavailable.
#[test]
fn test_load_meta_data_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = load_meta_data(&temp_dir.path().join("absent.mdf")).unwrap_err();
    assert!(matches!(err, SimError::MetaDataUnavailable { .. }));
}

/// Tests that malformed meta-data surfaces as a parse error.
#[test]
fn test_load_meta_data_malformed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = create_temp_file(temp_dir.path(), "bad.mdf", "S(start)0; P(run");

    let err = load_meta_data(&path).unwrap_err();
    assert!(matches!(err, SimError::MetaData(_)));
}

/// Tests log entry rendering.
#[test]
fn test_log_entry_format() {
    let entry = LogEntry::new(0.0123456789, "Process 1: start processing action");
    assert_eq!(
        entry.to_string(),
        "0.012346 - Process 1: start processing action"
    );
    assert_eq!(LogEntry::new(0.0, "").to_string(), "0.000000 - ");
}

/// Tests that the log file holds exactly the rendered display lines.
#[test]
fn test_write_log_file_matches_render() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("run.lgf");
    let entries = vec![
        LogEntry::new(0.000001, "Simulator program starting"),
        LogEntry::new(0.5, "Simulator program ending"),
    ];

    write_log_file(&path, &entries).unwrap();

    let mut rendered = Vec::new();
    render(&entries, &mut rendered).unwrap();
    assert_eq!(fs::read(&path).unwrap(), rendered);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "0.000001 - Simulator program starting\n0.500000 - Simulator program ending\n"
    );
}

/// Tests that an unwritable log path is reported.
#[test]
fn test_write_log_file_unwritable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing_dir").join("run.lgf");

    let err = write_log_file(&path, &[]).unwrap_err();
    assert!(matches!(err, SimError::LogWrite { .. }));
}

/// Tests the JSON export.
#[test]
fn test_write_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("run.json");
    let entries = vec![LogEntry::new(0.25, "OS: preparing process 1")];

    write_json(&path, &entries).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["elapsed_seconds"], 0.25);
    assert_eq!(value[0]["description"], "OS: preparing process 1");
}

/// Tests that the console display streams rendered lines to its writer.
#[test]
fn test_console_display_writes_lines() {
    let mut display = ConsoleDisplay::with_writer(Vec::new());
    display.show(&LogEntry::new(0.5, "Simulator program starting"));
    display.show(&LogEntry::new(1.0, "Simulator program ending"));

    assert!(!display.write_failed());
    assert_eq!(
        String::from_utf8(display.into_inner()).unwrap(),
        "0.500000 - Simulator program starting\n1.000000 - Simulator program ending\n"
    );
}

/// Tests that a failing display stream is flagged without aborting.
#[test]
fn test_console_display_write_failure() {
    let mut pipe = BrokenPipe { attempts: 0 };
    {
        let mut display = ConsoleDisplay::with_writer(&mut pipe);
        display.show(&LogEntry::new(0.0, "Simulator program starting"));
        assert!(display.write_failed());
        display.show(&LogEntry::new(0.1, "Simulator program ending"));
        assert!(display.write_failed());
    }
    assert_eq!(pipe.attempts, 2);
}
