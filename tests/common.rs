#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("sesslog")
}

/// Write a fixture log inside the system temp dir and return its path
pub fn write_log(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sesslog.log", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).unwrap();
    p
}

/// A log line ending in the fixed-width timestamp suffix the parser
/// expects: `<prefix> YYYY-MM-DD HH:MM AM|PM`
pub fn stamped(prefix: &str, date: &str, clock: &str, half: &str) -> String {
    format!("{} {} {} {}", prefix, date, clock, half)
}
