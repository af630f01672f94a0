//! Project actions: list, details, add, update, delete.

use folio_core::error::CoreError;
use folio_core::records::denormalize_category;
use folio_core::types::{DbId, Record};
use folio_store::repositories::{CategoryRepo, ProjectRepo};
use folio_store::{Collection, JsonStore};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::dispatch::ActionRequest;
use crate::response::Envelope;

/// Projects show an empty category name when the reference dangles.
const NO_CATEGORY: &str = "";

/// Payload of `add_project`.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: DbId,
}

/// All projects with `category_name` resolved.
pub async fn with_category_names(store: &JsonStore) -> AppResult<Vec<Record>> {
    let categories = CategoryRepo::list(store).await?;
    let mut projects = ProjectRepo::list(store).await?;
    for project in &mut projects {
        denormalize_category(project, &categories, NO_CATEGORY);
    }
    Ok(projects)
}

/// `get_projects`
pub async fn list(store: &JsonStore) -> AppResult<Envelope<Vec<Record>>> {
    Ok(Envelope::data(with_category_names(store).await?))
}

/// `get_project_details`
pub async fn details(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let mut project = ProjectRepo::find_by_id(store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Projects.entity(),
            id,
        })?;

    let categories = CategoryRepo::list(store).await?;
    denormalize_category(&mut project, &categories, NO_CATEGORY);

    Ok(Envelope::data(project))
}

/// `add_project`
pub async fn create(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<CreatedId>> {
    let id = ProjectRepo::create(store, &req.params).await?;

    tracing::info!(project_id = id, "Project added");

    Ok(Envelope::data_with_message(CreatedId { id }, "Project added"))
}

/// `update_project`
pub async fn update(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let id = req.id()?;
    let project = ProjectRepo::update(store, id, &req.params)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Collection::Projects.entity(),
            id,
        })?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Envelope::data_with_message(project, "Project updated"))
}

/// `delete_project`
pub async fn delete(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<()>> {
    let id = req.id()?;
    if !ProjectRepo::delete(store, id).await? {
        return Err(CoreError::NotFound {
            entity: Collection::Projects.entity(),
            id,
        }
        .into());
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(Envelope::message("Project deleted"))
}
