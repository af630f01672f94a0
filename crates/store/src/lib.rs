//! Whole-file JSON storage for the folio content server.
//!
//! Each collection lives in one file under the data directory and is
//! re-read on every access. Writes replace the whole file.

pub mod collection;
pub mod error;
pub mod repositories;
pub mod store;

pub use collection::Collection;
pub use error::StoreError;
pub use store::JsonStore;

/// Verify the data directory exists and is a directory.
pub async fn health_check(store: &JsonStore) -> Result<(), StoreError> {
    let dir = store.data_dir();
    let meta = tokio::fs::metadata(dir)
        .await
        .map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(StoreError::Shape {
            path: dir.to_path_buf(),
            expected: "a directory",
        })
    }
}
