//! Repository for the singleton `profile.json` document.

use folio_core::records::shallow_merge;
use folio_core::types::Record;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::JsonStore;

pub struct ProfileRepo;

impl ProfileRepo {
    /// The profile document, or `None` when the file does not exist.
    pub async fn get(store: &JsonStore) -> Result<Option<Record>, StoreError> {
        match store.read_object(Collection::Profile).await {
            Ok(profile) => Ok(Some(profile)),
            Err(StoreError::Missing { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Shallow-merge `patch` into the stored profile and rewrite the file.
    /// Returns the merged document, or `None` when there is no profile to
    /// merge into.
    pub async fn merge(store: &JsonStore, patch: Record) -> Result<Option<Record>, StoreError> {
        let merged = store
            .update_object(Collection::Profile, |profile| {
                shallow_merge(profile, patch);
                profile.clone()
            })
            .await;
        match merged {
            Ok(profile) => Ok(Some(profile)),
            Err(StoreError::Missing { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
