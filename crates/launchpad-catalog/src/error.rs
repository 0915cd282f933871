//! Error types for launchpad-catalog

use std::path::PathBuf;

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Activation errors
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("\"{name}\" has no launch target")]
    NoTarget { name: String },

    #[error("failed to start {path:?}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URI \"{uri}\": {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no handler could open \"{uri}\": {source}")]
    Open {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}
