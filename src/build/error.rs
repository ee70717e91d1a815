//! Build error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while rendering and writing pages.
///
/// A missing translation file is not an error: it is reported as a skip.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse translations `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
