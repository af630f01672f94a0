//! Repositories for the admin-managed content collections: articles,
//! photos and visitor messages.

use folio_core::records::set_flag;
use folio_core::types::{DbId, Record};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::JsonStore;

use super::{delete_by_id, edit_by_id, find_by_id};

pub struct ArticleRepo;

impl ArticleRepo {
    pub async fn list(store: &JsonStore) -> Result<Vec<Record>, StoreError> {
        store.read_array(Collection::Articles).await
    }

    pub async fn find_by_id(store: &JsonStore, id: DbId) -> Result<Option<Record>, StoreError> {
        find_by_id(store, Collection::Articles, id).await
    }
}

pub struct PhotoRepo;

impl PhotoRepo {
    pub async fn list(store: &JsonStore) -> Result<Vec<Record>, StoreError> {
        store.read_array(Collection::Photos).await
    }

    pub async fn find_by_id(store: &JsonStore, id: DbId) -> Result<Option<Record>, StoreError> {
        find_by_id(store, Collection::Photos, id).await
    }
}

pub struct MessageRepo;

impl MessageRepo {
    pub async fn list(store: &JsonStore) -> Result<Vec<Record>, StoreError> {
        store.read_array(Collection::Messages).await
    }

    pub async fn find_by_id(store: &JsonStore, id: DbId) -> Result<Option<Record>, StoreError> {
        find_by_id(store, Collection::Messages, id).await
    }

    /// Set the `is_read` flag. Messages carry no `updated_at`.
    pub async fn set_read(
        store: &JsonStore,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<Record>, StoreError> {
        edit_by_id(store, Collection::Messages, id, |record| {
            set_flag(record, "is_read", is_read);
        })
        .await
    }

    pub async fn delete(store: &JsonStore, id: DbId) -> Result<bool, StoreError> {
        delete_by_id(store, Collection::Messages, id).await
    }
}
