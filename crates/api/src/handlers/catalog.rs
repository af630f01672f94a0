//! Read-only catalog actions: categories, icons, site info, and the
//! combined payload served when no action is named.

use folio_core::site::{SiteInfo, SITE_INFO};
use folio_core::types::Record;
use folio_store::repositories::{CategoryRepo, IconRepo};
use folio_store::JsonStore;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::handlers::projects;
use crate::response::Envelope;

/// Payload of the default action.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub projects: Vec<Record>,
    pub categories: Value,
    pub icons: Value,
}

/// Default action: projects (with category names), categories and icons.
pub async fn overview(store: &JsonStore) -> AppResult<Envelope<Overview>> {
    let projects = projects::with_category_names(store).await?;
    let categories = CategoryRepo::raw(store).await?;
    let icons = IconRepo::raw(store).await?;

    Ok(Envelope::data(Overview {
        projects,
        categories,
        icons,
    }))
}

/// `get_categories` -- file contents verbatim.
pub async fn categories(store: &JsonStore) -> AppResult<Envelope<Value>> {
    Ok(Envelope::data(CategoryRepo::raw(store).await?))
}

/// `get_icons` -- file contents verbatim.
pub async fn icons(store: &JsonStore) -> AppResult<Envelope<Value>> {
    Ok(Envelope::data(IconRepo::raw(store).await?))
}

/// `get_site_info`
pub fn site_info() -> Envelope<SiteInfo> {
    Envelope::data(SITE_INFO)
}
