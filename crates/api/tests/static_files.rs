//! Integration tests for static asset serving and front-door routing.

mod common;

use std::fs;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, get, Fixture};
use tower::ServiceExt;

#[tokio::test]
async fn root_serves_index_html() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/html");
    assert_eq!(body_text(response).await, "<html>home</html>");
}

#[tokio::test]
async fn nested_asset_gets_mime_type() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/static/css/main.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/css");
}

#[tokio::test]
async fn unknown_extension_is_octet_stream() {
    let fixture = Fixture::empty();
    fs::write(fixture.root().join("notes.bin"), [0u8, 1, 2]).unwrap();

    let response = get(fixture.app(), "/notes.bin").await;
    assert_eq!(response.headers()["content-type"], "application/octet-stream");
}

#[tokio::test]
async fn missing_file_is_404_html() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/does-not-exist.html").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["content-type"], "text/html");
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn directory_is_not_listed() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/static/css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn percent_encoded_non_ascii_name_is_decoded() {
    let fixture = Fixture::empty();
    fs::write(fixture.root().join("简历.md"), "# cv").unwrap();

    let response = get(fixture.app(), "/%E7%AE%80%E5%8E%86.md").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/markdown");
    assert_eq!(body_text(response).await, "# cv");
}

#[tokio::test]
async fn encoded_traversal_is_rejected() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/static/%2E%2E/%2E%2E/etc/passwd").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_utf8_path_is_404_html() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/%FF.html").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["content-type"], "text/html");
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn static_files_answer_any_method() {
    let fixture = Fixture::empty();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/static/css/main.css")
        .body(Body::empty())
        .unwrap();

    let response = fixture.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/css");
    assert_eq!(body_text(response).await, "body{}");
}

#[tokio::test]
async fn data_files_are_reachable_as_static_assets() {
    let fixture = Fixture::new();
    let response = get(fixture.app(), "/admin/data/categories.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn vite_client_path_gets_stub_script() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/@vite/client").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/javascript");
    assert!(body_text(response).await.starts_with("// Vite client stub"));
}

#[tokio::test]
async fn health_reports_data_dir() {
    let fixture = Fixture::empty();
    let json = body_json(get(fixture.app(), "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data_dir_ok"], true);

    fs::remove_dir_all(fixture.data_path("")).unwrap();
    let json = body_json(get(fixture.app(), "/health").await).await;
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let fixture = Fixture::empty();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api.php?action=get_projects")
        .header("Origin", "http://example.org")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = fixture.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("DELETE"), "Allow-Methods should contain DELETE, got: {methods}");
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let fixture = Fixture::empty();
    let response = get(fixture.app(), "/").await;
    let id = response.headers().get("x-request-id").expect("missing x-request-id");
    assert_eq!(id.to_str().unwrap().len(), 36);
}
