//! Unified application error type.
//! All modules (core, cli, models) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed line {0}: {1}")]
    MalformedLine(usize, String),
}

pub type AppResult<T> = Result<T, AppError>;
