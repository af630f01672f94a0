//! Integration tests for the read-only catalog actions, the default
//! aggregate action, the profile ("config") actions and the synthetic
//! user actions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, Fixture};
use serde_json::json;

// ---------------------------------------------------------------------------
// Categories / icons / site info
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_categories_returns_file_verbatim() {
    let fixture = Fixture::new();
    fixture.write_collection("categories.json", &json!([{"id": 1, "name": "Web"}]));

    let json = body_json(get(fixture.app(), "/api.php?action=get_categories").await).await;
    assert_eq!(json, json!({"success": true, "data": [{"id": 1, "name": "Web"}]}));
}

#[tokio::test]
async fn get_icons_returns_file_verbatim() {
    let fixture = Fixture::new();
    let json = body_json(get(fixture.app(), "/api.php?action=get_icons").await).await;
    assert_eq!(json["data"], fixture.read_collection("icons.json"));
}

#[tokio::test]
async fn site_info_is_static() {
    let fixture = Fixture::empty();
    let json = body_json(get(fixture.app(), "/api.php?action=get_site_info").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "ZhouYou");
    assert!(json["data"]["contact_info"]["github"].is_string());
}

// ---------------------------------------------------------------------------
// Default action
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_action_returns_overview() {
    let fixture = Fixture::new();
    let json = body_json(get(fixture.app(), "/api.php").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["projects"][0]["category_name"], "Web");
    assert_eq!(json["data"]["categories"], fixture.read_collection("categories.json"));
    assert_eq!(json["data"]["icons"], fixture.read_collection("icons.json"));
}

#[tokio::test]
async fn unknown_action_is_treated_as_overview() {
    let fixture = Fixture::new();
    let a = body_json(get(fixture.app(), "/api.php?action=launch_rockets").await).await;
    let b = body_json(get(fixture.app(), "/api.php").await).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn admin_alias_reaches_the_same_dispatcher() {
    let fixture = Fixture::new();
    let json = body_json(get(fixture.app(), "/admin/api.php?action=get_categories").await).await;
    assert_eq!(json["data"], fixture.read_collection("categories.json"));
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_config_from_body_then_get_config_is_shallow_merge() {
    let fixture = Fixture::new();

    let response = post_json(
        fixture.app(),
        "/api.php?action=update_config",
        json!({"title": "Architect", "contact": {"email": "new@example.com"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let json = body_json(get(fixture.app(), "/api.php?action=get_config").await).await;
    let mut expected = common::default_profile();
    expected["title"] = json!("Architect");
    expected["contact"] = json!({"email": "new@example.com"});
    assert_eq!(json["data"], expected);
}

#[tokio::test]
async fn update_config_from_query_params() {
    let fixture = Fixture::new();

    let json = body_json(get(fixture.app(), "/api.php?action=update_config&bio=Updated").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["bio"], "Updated");
    assert!(json["data"].get("action").is_none());

    assert_eq!(fixture.read_collection("profile.json")["bio"], "Updated");
}

#[tokio::test]
async fn update_config_rejects_non_object_body() {
    let fixture = Fixture::new();
    let json = body_json(post_json(fixture.app(), "/api.php?action=update_config", json!([1, 2])).await).await;
    assert_eq!(json["success"], false);
    assert_eq!(fixture.read_collection("profile.json"), common::default_profile());
}

#[tokio::test]
async fn get_config_without_profile_is_failure_envelope() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/api.php?action=get_config").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], false);
}

// ---------------------------------------------------------------------------
// Synthetic users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_users_returns_single_admin() {
    let fixture = Fixture::empty();
    let json = body_json(get(fixture.app(), "/api.php?action=get_users").await).await;
    let users = json["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "admin");
    assert_eq!(users[0]["role"], "admin");
}

#[tokio::test]
async fn user_writes_are_acknowledged_not_persisted() {
    let fixture = Fixture::empty();

    let added = body_json(get(fixture.app(), "/api.php?action=add_user&username=bob").await).await;
    assert_eq!(added["success"], true);
    assert_eq!(added["data"]["id"], 2);

    let updated = body_json(get(fixture.app(), "/api.php?action=update_user&id=1&nickname=x").await).await;
    assert_eq!(updated["success"], true);

    let users = body_json(get(fixture.app(), "/api.php?action=get_users").await).await;
    assert_eq!(users["data"]["users"].as_array().unwrap().len(), 1);
    assert_eq!(users["data"]["users"][0]["nickname"], "Administrator");
}

#[tokio::test]
async fn user_actions_require_id() {
    let fixture = Fixture::empty();
    for action in ["get_user", "update_user", "delete_user"] {
        let json = body_json(get(fixture.app(), &format!("/api.php?action={action}")).await).await;
        assert_eq!(json["success"], false, "{action} without id must fail");
    }
}
