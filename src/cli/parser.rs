use clap::Parser;

/// Command-line interface definition for sesslog
/// CLI application to summarize fixed-format session logs
#[derive(Parser)]
#[command(
    name = "sesslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize a session log: per-session durations plus total and average session length",
    long_about = None
)]
pub struct Cli {
    /// Path to the session log file.
    ///
    /// The file repeats in groups of three lines: a header line, a start
    /// line (leading session id + timestamp suffix), and an end line
    /// (timestamp suffix only).
    pub file: String,
}
