//! Profile ("config") actions.

use folio_core::error::CoreError;
use folio_core::records::is_overlay_param;
use folio_core::types::Record;
use folio_store::repositories::ProfileRepo;
use folio_store::{Collection, JsonStore};
use serde_json::Value;

use crate::error::AppResult;
use crate::handlers::dispatch::ActionRequest;
use crate::response::Envelope;

fn profile_missing() -> CoreError {
    CoreError::Missing {
        entity: Collection::Profile.entity(),
    }
}

/// `get_config`
pub async fn get_config(store: &JsonStore) -> AppResult<Envelope<Record>> {
    let profile = ProfileRepo::get(store).await?.ok_or_else(profile_missing)?;
    Ok(Envelope::data(profile))
}

/// `update_config`
///
/// The patch is the JSON object body when one is sent, otherwise the query
/// parameters (minus `action`/`id`) as strings.
pub async fn update_config(store: &JsonStore, req: &ActionRequest) -> AppResult<Envelope<Record>> {
    let patch = match req.json_object()? {
        Some(body) => body,
        None => patch_from_params(&req.params),
    };
    let fields = patch.len();

    let merged = ProfileRepo::merge(store, patch)
        .await?
        .ok_or_else(profile_missing)?;

    tracing::info!(fields, "Profile updated");

    Ok(Envelope::data_with_message(merged, "Configuration updated"))
}

fn patch_from_params(params: &[(String, String)]) -> Record {
    params
        .iter()
        .filter(|(key, _)| is_overlay_param(key))
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_patch_drops_reserved_keys() {
        let params = vec![
            ("action".to_string(), "update_config".to_string()),
            ("name".to_string(), "Zhou".to_string()),
        ];
        let patch = patch_from_params(&params);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch["name"], Value::String("Zhou".into()));
    }
}
