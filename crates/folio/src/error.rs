//! CLI error types.

use std::path::PathBuf;

use folio_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read content file {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content file {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content file has no `{field}` for the {view} view")]
    MissingContent {
        view: &'static str,
        field: &'static str,
    },
}
