use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Structural problems found while turning note JSON into nodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required key is absent. `field` is a dotted path such as `attrs.level`.
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A key is present but holds the wrong kind of JSON value.
    #[error("field `{field}` should be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl ParseError {
    pub fn missing(field: impl Into<String>) -> Self {
        ParseError::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        ParseError::InvalidField {
            field: field.into(),
            expected,
        }
    }
}

/// Failure converting note text to markup, without any file involved.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure converting one note file. Every variant names the offending input.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot convert {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// The file this error is about: the input, or the output for `Write`.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::Read { path, .. }
            | ConvertError::Json { path, .. }
            | ConvertError::Parse { path, .. }
            | ConvertError::Write { path, .. } => path.as_path(),
        }
    }
}
