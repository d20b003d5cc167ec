//! Error types for the guide.
//!
//! The selector itself never fails. These cover the edges: parsing ids
//! typed on the command line, reading config files, terminal I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("unknown tab: {0} (expected introduction, symbolic, concolic, hoare or tools)")]
    UnknownTab(String),

    #[error("unknown Hoare scenario: {0} (expected linear, conditional or loop)")]
    UnknownScenario(String),

    #[error("config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GuideResult<T> = Result<T, GuideError>;
