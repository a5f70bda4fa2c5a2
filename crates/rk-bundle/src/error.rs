//! Error types for bundle operations.

use thiserror::Error;

/// Errors that can occur while packaging or reading bundles.
#[derive(Error, Debug)]
pub enum BundleError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested entry is not in the archive
    #[error("file not found in bundle: {0}")]
    FileNotFound(String),
}

/// Result type for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;

impl From<BundleError> for rk_common::Error {
    fn from(err: BundleError) -> Self {
        match err {
            BundleError::Io(e) => rk_common::Error::Io(e),
            BundleError::Json(e) => rk_common::Error::Json(e),
            other => rk_common::Error::Packaging(other.to_string()),
        }
    }
}
