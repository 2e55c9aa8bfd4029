use std::path::PathBuf;
use thiserror::Error;

/// Failures inside a scan.
///
/// `Scanner::scan` never returns these. They are logged and the affected file
/// (or the whole listing) is left out of the result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot enumerate {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot stat {path:?}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("{path:?} has no usable modification time")]
    Timestamp { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("failed to serialize endpoint payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
