//! The [`JsonStore`] handle.
//!
//! Reads take no lock and always see a complete file, because writes go
//! to a sibling temp file that is then renamed over the target.
//! Read-modify-write cycles on the same collection are serialised by a
//! per-collection async mutex so that two requests in this process
//! cannot lose each other's update. Other processes writing the same
//! files are not coordinated with.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_core::error::CoreError;
use folio_core::types::Record;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::collection::Collection;
use crate::error::StoreError;

/// Cheaply cloneable handle to the data directory.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<Inner>,
}

struct Inner {
    data_dir: PathBuf,
    /// Indexed by `Collection as usize`.
    write_locks: [Mutex<()>; Collection::ALL.len()],
}

impl JsonStore {
    /// Open a store rooted at `data_dir`. The directory is not touched
    /// until the first read.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let write_locks = std::array::from_fn(|_| Mutex::new(()));
        Self {
            inner: Arc::new(Inner {
                data_dir: data_dir.into(),
                write_locks,
            }),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Absolute path of a collection file.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.inner.data_dir.join(collection.file_name())
    }

    /// Read and parse a collection file, whatever its shape.
    pub async fn read_value(&self, collection: Collection) -> Result<Value, StoreError> {
        let path = self.path(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing { path });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse { path, source })
    }

    /// Read a collection that must be a JSON array of objects.
    pub async fn read_array(&self, collection: Collection) -> Result<Vec<Record>, StoreError> {
        let value = self.read_value(collection).await?;
        into_records(value).ok_or_else(|| StoreError::Shape {
            path: self.path(collection),
            expected: "an array of objects",
        })
    }

    /// Read a collection that must be a single JSON object.
    pub async fn read_object(&self, collection: Collection) -> Result<Record, StoreError> {
        match self.read_value(collection).await? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Shape {
                path: self.path(collection),
                expected: "an object",
            }),
        }
    }

    /// Replace a collection file with `value`, pretty-printed.
    pub async fn write_value(&self, collection: Collection, value: &Value) -> Result<(), StoreError> {
        let path = self.path(collection);
        let mut body = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        body.push(b'\n');

        let tmp = self.inner.data_dir.join(format!(
            ".{}.{}{TEMP_SUFFIX}",
            collection.file_name(),
            uuid::Uuid::new_v4()
        ));
        if let Err(source) = tokio::fs::write(&tmp, &body).await {
            return Err(StoreError::Io { path: tmp, source });
        }
        if let Err(source) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io { path, source });
        }

        tracing::debug!(file = collection.file_name(), bytes = body.len(), "Collection written");
        Ok(())
    }

    /// Read-modify-write an array collection.
    ///
    /// `mutate` returns `None` to signal that nothing changed; the file is
    /// then left alone and `None` is returned.
    pub async fn update_array<T, F>(
        &self,
        collection: Collection,
        mutate: F,
    ) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut Vec<Record>) -> Option<T>,
    {
        self.try_update_array(collection, |records| Ok(mutate(records)))
            .await
    }

    /// Like [`update_array`](Self::update_array), but `mutate` may refuse
    /// the change. A refusal leaves the file untouched and comes back as
    /// [`StoreError::Rejected`].
    pub async fn try_update_array<T, F>(
        &self,
        collection: Collection,
        mutate: F,
    ) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut Vec<Record>) -> Result<Option<T>, CoreError>,
    {
        let _guard = self.lock(collection).await;
        let mut records = self.read_array(collection).await?;
        let Some(out) = mutate(&mut records)? else {
            return Ok(None);
        };
        let value = Value::Array(records.into_iter().map(Value::Object).collect());
        self.write_value(collection, &value).await?;
        Ok(Some(out))
    }

    /// Read-modify-write an object collection.
    pub async fn update_object<T, F>(&self, collection: Collection, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Record) -> T,
    {
        let _guard = self.lock(collection).await;
        let mut record = self.read_object(collection).await?;
        let out = mutate(&mut record);
        self.write_value(collection, &Value::Object(record)).await?;
        Ok(out)
    }

    /// Delete temp files left behind by writes that never reached their
    /// rename, e.g. because the request was cancelled. Only safe while no
    /// write is in flight, so call it before serving. Returns how many
    /// files were removed.
    pub async fn sweep_temp_files(&self) -> Result<usize, StoreError> {
        let dir = &self.inner.data_dir;
        let io_err = |source| StoreError::Io {
            path: dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !is_temp_name(name) {
                continue;
            }
            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(StoreError::Io {
                        path: entry.path(),
                        source,
                    })
                }
            }
        }

        if removed > 0 {
            tracing::info!(removed, "Removed stale temp files");
        }
        Ok(removed)
    }

    async fn lock(&self, collection: Collection) -> tokio::sync::MutexGuard<'_, ()> {
        self.inner.write_locks[collection as usize].lock().await
    }
}

const TEMP_SUFFIX: &str = ".tmp";

/// Whether `name` is a write temp file (`.<collection file>.<uuid>.tmp`).
fn is_temp_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('.') else {
        return false;
    };
    name.ends_with(TEMP_SUFFIX)
        && Collection::ALL
            .iter()
            .any(|c| rest.starts_with(c.file_name()) && rest[c.file_name().len()..].starts_with('.'))
}

fn into_records(value: Value) -> Option<Vec<Record>> {
    let Value::Array(items) = value else {
        return None;
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}
