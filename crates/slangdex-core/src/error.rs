//! Error types for slangdex
//!
//! Every fallible operation returns `Result<T, Error>`. These are the fatal
//! errors only: entry-level problems found by the validator are diagnostics,
//! not errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal slangdex errors
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dataset is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Dataset parsed, but the top-level value is not an array
    #[error("Top-level JSON must be an array in {} (found {found})", .path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    /// Destination directory could not be created
    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cleaned output could not be written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Auxiliary mapping file exists but could not be copied
    #[error("Cannot copy {} to {}: {source}", .from.display(), .to.display())]
    CopyMapping {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cleaned entries could not be serialized
    #[error("Cannot serialize cleaned entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for slangdex operations
pub type Result<T> = std::result::Result<T, Error>;
