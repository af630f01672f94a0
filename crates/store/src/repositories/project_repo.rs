//! Repository for `projects.json`.

use folio_core::ids::next_id;
use folio_core::records::{new_project, overlay_params, touch};
use folio_core::types::{now_string, DbId, Record};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::JsonStore;

use super::{delete_by_id, edit_by_id, find_by_id};

/// Provides data access for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn list(store: &JsonStore) -> Result<Vec<Record>, StoreError> {
        store.read_array(Collection::Projects).await
    }

    pub async fn find_by_id(store: &JsonStore, id: DbId) -> Result<Option<Record>, StoreError> {
        find_by_id(store, Collection::Projects, id).await
    }

    /// Append a project built from request parameters and return its id.
    pub async fn create(store: &JsonStore, params: &[(String, String)]) -> Result<DbId, StoreError> {
        let now = now_string();
        let created = store
            .try_update_array(Collection::Projects, |records| {
                let id = next_id(records)?;
                records.push(new_project(id, params, &now));
                Ok(Some(id))
            })
            .await?;
        // The closure always reports a change.
        Ok(created.unwrap_or_default())
    }

    /// Overlay parameters onto an existing project and stamp
    /// `updated_at`. Returns the updated record, or `None` when absent.
    pub async fn update(
        store: &JsonStore,
        id: DbId,
        params: &[(String, String)],
    ) -> Result<Option<Record>, StoreError> {
        let now = now_string();
        edit_by_id(store, Collection::Projects, id, |record| {
            overlay_params(record, params);
            touch(record, &now);
        })
        .await
    }

    /// Remove a project. Returns `false` when no project has that id.
    pub async fn delete(store: &JsonStore, id: DbId) -> Result<bool, StoreError> {
        delete_by_id(store, Collection::Projects, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use folio_core::error::CoreError;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn store_with(projects: Value) -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path());
        store.write_value(Collection::Projects, &projects).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one() {
        let (_dir, store) = store_with(json!([{"id": "1"}, {"id": 4}])).await;
        let id = ProjectRepo::create(&store, &params(&[("title", "Foo")])).await.unwrap();
        assert_eq!(id, 5);
        assert_eq!(ProjectRepo::list(&store).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_in_empty_collection_starts_at_one() {
        let (_dir, store) = store_with(json!([])).await;
        let id = ProjectRepo::create(&store, &[]).await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn create_refuses_when_ids_are_exhausted() {
        let seed = json!([{"id": i64::MAX, "title": "Last"}]);
        let (_dir, store) = store_with(seed.clone()).await;

        let err = ProjectRepo::create(&store, &params(&[("title", "x")])).await.unwrap_err();
        assert_matches!(err, StoreError::Rejected(CoreError::Internal(_)));

        let stored = store.read_value(Collection::Projects).await.unwrap();
        assert_eq!(stored, seed);
    }

    #[tokio::test]
    async fn update_overlays_and_returns_none_when_absent() {
        let (_dir, store) = store_with(json!([{"id": 1, "title": "Old", "updated_at": "2000-01-01 00:00:00"}])).await;

        let updated = ProjectRepo::update(&store, 1, &params(&[("title", "New")]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["title"], json!("New"));
        assert_ne!(updated["updated_at"], json!("2000-01-01 00:00:00"));

        assert!(ProjectRepo::update(&store, 2, &[]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let (_dir, store) = store_with(json!([{"id": 1}, {"id": 2}])).await;
        assert!(ProjectRepo::delete(&store, 1).await.unwrap());
        assert!(!ProjectRepo::delete(&store, 1).await.unwrap());

        let remaining = ProjectRepo::list(&store).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["id"], json!(2));
    }
}
