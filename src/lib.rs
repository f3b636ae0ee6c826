//! sesslog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    cli::commands::report::handle(&cli)
}
