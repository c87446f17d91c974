use std::{io, path::PathBuf};

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid setting '{field_path}': {message}")]
pub struct ValidationError {
    /// Dotted path to the offending field (e.g. "canonical.sand")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Everything that can abort a cleaning run.
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Built-in settings are invalid:\n{}", format_validation_errors(.0))]
    InvalidSettings(Vec<ValidationError>),

    #[error("Failed to read dictionary '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse dictionary '{}': {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode cleaned dictionary: {0}")]
    OutputEncode(#[source] serde_json::Error),

    #[error("Failed to write cleaned dictionary '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .join("\n")
}
