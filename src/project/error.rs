//! Error types for loading scenarios.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur while reading or parsing a scenario file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while walking the corpus directory.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Corpus root or scenario file that does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Diagram fence opened but never closed.
    #[error("Unterminated diagram fence opened on line {line_no}")]
    UnterminatedFence { line_no: usize },

    /// The diagram itself is malformed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// Whether the scenario text was read but could not be understood.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::UnterminatedFence { .. })
    }
}
