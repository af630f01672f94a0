//! The `/api.php` action dispatcher.
//!
//! Every request is resolved to one [`Action`], its required parameters
//! are checked, and the matching handler runs against the JSON store.
//! All failures come back as an envelope; nothing escapes as a panic or
//! a bare error page.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use folio_core::action::Action;
use folio_core::error::CoreError;
use folio_core::ids::parse_id;
use folio_core::types::{DbId, Record};
use serde_json::Value;

use crate::error::AppResult;
use crate::handlers::{catalog, content, profile, projects, users};
use crate::state::AppState;

/// Everything an action handler may look at.
#[derive(Debug, Default)]
pub struct ActionRequest {
    /// Query parameters in arrival order, duplicates kept.
    pub params: Vec<(String, String)>,
    /// Raw request body; only `update_config` reads it.
    pub body: Bytes,
}

impl ActionRequest {
    pub fn new(params: Vec<(String, String)>, body: Bytes) -> Self {
        Self { params, body }
    }

    /// Last value submitted for `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `id` parameter as a record id.
    pub fn id(&self) -> Result<DbId, CoreError> {
        parse_id(self.param("id").unwrap_or_default())
    }

    /// The body as a JSON object, or `None` when the body is empty.
    pub fn json_object(&self) -> Result<Option<Record>, CoreError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(CoreError::Validation("request body must be a JSON object".into())),
            Err(e) => Err(CoreError::Validation(format!("request body is not valid JSON: {e}"))),
        }
    }
}

/// ANY /api.php, ANY /admin/api.php
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    let request = ActionRequest::new(params, body);
    let action = Action::resolve(request.param("action"));

    tracing::info!(action = action.name(), "API request");

    match run(&state, action, &request).await {
        Ok(response) => {
            if action.is_mutation() {
                tracing::info!(action = action.name(), "Collection updated");
            }
            response
        }
        Err(err) => err.into_response(),
    }
}

/// Validate and execute one action.
pub async fn run(state: &AppState, action: Action, req: &ActionRequest) -> AppResult<Response> {
    action.validate(&req.params)?;

    let store = &state.store;
    let response = match action {
        Action::Overview => catalog::overview(store).await?.into_response(),
        Action::GetProjects => projects::list(store).await?.into_response(),
        Action::GetProjectDetails => projects::details(store, req).await?.into_response(),
        Action::AddProject => projects::create(store, req).await?.into_response(),
        Action::UpdateProject => projects::update(store, req).await?.into_response(),
        Action::DeleteProject => projects::delete(store, req).await?.into_response(),
        Action::GetCategories => catalog::categories(store).await?.into_response(),
        Action::GetIcons => catalog::icons(store).await?.into_response(),
        Action::GetSiteInfo => catalog::site_info().into_response(),
        Action::GetConfig => profile::get_config(store).await?.into_response(),
        Action::UpdateConfig => profile::update_config(store, req).await?.into_response(),
        Action::GetUsers => users::list().into_response(),
        Action::GetUser => users::get(req)?.into_response(),
        Action::AddUser => users::add().into_response(),
        Action::UpdateUser => users::update(req)?.into_response(),
        Action::DeleteUser => users::delete(req)?.into_response(),
        Action::GetArticles => content::list_articles(store, req).await?.into_response(),
        Action::GetArticle => content::article(store, req).await?.into_response(),
        Action::GetPhotos => content::list_photos(store, req).await?.into_response(),
        Action::GetPhoto => content::photo(store, req).await?.into_response(),
        Action::GetMessages => content::list_messages(store, req).await?.into_response(),
        Action::GetMessage => content::message(store, req).await?.into_response(),
        Action::MarkMessageRead => content::mark_message_read(store, req).await?.into_response(),
        Action::DeleteMessage => content::delete_message(store, req).await?.into_response(),
    };

    Ok(response)
}
