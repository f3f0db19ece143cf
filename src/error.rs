//! Fatal error taxonomy.
//!
//! Anything in here ends the run. Bad registry records are not errors, see
//! [`crate::models::DataQualityIssue`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Registry unreachable or the body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("registry {url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A single line longer than the reader accepts. The registry never
    /// produces these, so the whole stream is treated as corrupt.
    #[error("delegation stream corrupt: line {line} exceeds {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("error reading delegation stream: {0}")]
    Read(#[from] std::io::Error),

    #[error("error reading input file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("platform {name} is not supported, expected one of: {expected}")]
    UnsupportedPlatform { name: String, expected: String },
}
