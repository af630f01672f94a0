//! Read-only lookup collections: categories and icons.

use folio_core::types::Record;
use serde_json::Value;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::JsonStore;

pub struct CategoryRepo;

impl CategoryRepo {
    /// The categories file exactly as stored.
    pub async fn raw(store: &JsonStore) -> Result<Value, StoreError> {
        store.read_value(Collection::Categories).await
    }

    /// Categories as records, for resolving `category_id` references.
    pub async fn list(store: &JsonStore) -> Result<Vec<Record>, StoreError> {
        store.read_array(Collection::Categories).await
    }
}

pub struct IconRepo;

impl IconRepo {
    /// The icons file exactly as stored.
    pub async fn raw(store: &JsonStore) -> Result<Value, StoreError> {
        store.read_value(Collection::Icons).await
    }
}
