#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use time_hedge::models::{Mode, Record};

/// Fixed instant (epoch seconds) the scenarios count from.
pub const T0: f64 = 1_700_000_000.0;

/// Binary under test, with HOME pointed at `home` so no real config or data
/// file is touched.
pub fn th(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("time_hedge");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Scratch home directory plus a data file path inside it (not created).
pub fn setup_home() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let data = dir.path().join("hedge.json");
    (dir, data)
}

pub fn write_record(path: &Path, record: &Record) {
    fs::write(path, serde_json::to_string_pretty(record).expect("serialize")).expect("write");
}

pub fn read_record(path: &Path) -> Record {
    let content = fs::read_to_string(path).expect("read data file");
    serde_json::from_str(&content).expect("parse data file")
}

pub fn record(balance: f64, mode: Mode, session_start: f64) -> Record {
    Record::new(balance, mode, session_start)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
