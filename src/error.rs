//! Failures that abort a generate run.
//!
//! Anything that goes wrong here stops the run before the chart page is
//! written. Malformed markdown is not an error: unrecognised lines are
//! skipped by the extractor and never reach this type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the README or splicing the chart page.
#[derive(Debug, Error)]
pub enum Error {
    /// A required file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The updated page could not be written back.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The host text does not contain the assignment marker.
    #[error("could not find data section {marker:?}")]
    MarkerNotFound {
        /// Marker that was searched for.
        marker: String,
    },

    /// The assignment's braces never close.
    #[error("data section starting at byte {start} has no closing brace")]
    UnbalancedBraces {
        /// Byte offset of the marker.
        start: usize,
    },

    /// The tree could not be serialized.
    #[error("could not serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
