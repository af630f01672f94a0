use std::path::PathBuf;

use folio_core::error::CoreError;

/// Failures reading or writing a JSON file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file does not exist.
    #[error("{} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not the document shape the caller needs.
    #[error("{} must contain {expected}", path.display())]
    Shape {
        path: PathBuf,
        expected: &'static str,
    },

    /// A record rule refused the change; nothing was written.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}
