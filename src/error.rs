//! Top-level error for a generation run.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::fetch::FetchError;
use crate::output::WriteError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no metrics source given; pass a URL or --input")]
    MissingSource,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to read metrics from {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output failed: {0}")]
    Write(#[from] WriteError),
}
