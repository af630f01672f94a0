//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&JsonStore` as the first argument. Lookups return `Option` for
//! an absent record; callers decide how to report that.

pub mod content_repo;
pub mod lookup_repo;
pub mod profile_repo;
pub mod project_repo;

pub use content_repo::{ArticleRepo, MessageRepo, PhotoRepo};
pub use lookup_repo::{CategoryRepo, IconRepo};
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;

use folio_core::ids::position_of;
use folio_core::types::{DbId, Record};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::JsonStore;

/// Find one record by id in an array collection.
pub(crate) async fn find_by_id(
    store: &JsonStore,
    collection: Collection,
    id: DbId,
) -> Result<Option<Record>, StoreError> {
    let mut records = store.read_array(collection).await?;
    Ok(position_of(&records, id).map(|i| records.swap_remove(i)))
}

/// Remove the record with `id`. Returns `false` (and leaves the file
/// untouched) when no record matches.
pub(crate) async fn delete_by_id(
    store: &JsonStore,
    collection: Collection,
    id: DbId,
) -> Result<bool, StoreError> {
    let removed = store
        .update_array(collection, |records| {
            let index = position_of(records, id)?;
            records.remove(index);
            Some(())
        })
        .await?;
    Ok(removed.is_some())
}

/// Apply `edit` to the record with `id` and persist. Returns the edited
/// record, or `None` when no record matches.
pub(crate) async fn edit_by_id<F>(
    store: &JsonStore,
    collection: Collection,
    id: DbId,
    edit: F,
) -> Result<Option<Record>, StoreError>
where
    F: FnOnce(&mut Record),
{
    store
        .update_array(collection, |records| {
            let index = position_of(records, id)?;
            let record = &mut records[index];
            edit(record);
            Some(record.clone())
        })
        .await
}
