#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::{default_data_dir, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// A throwaway site checkout: `index.html`, a couple of assets and the
/// JSON collections under `admin/data`.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Site with the default collections.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_collection("projects.json", &default_projects());
        fixture.write_collection("categories.json", &default_categories());
        fixture.write_collection("icons.json", &json!([{"id": 1, "name": "github", "class": "fa-github"}]));
        fixture.write_collection("profile.json", &default_profile());
        fixture.write_collection("articles.json", &default_articles());
        fixture.write_collection("photos.json", &default_photos());
        fixture.write_collection("messages.json", &default_messages());
        fixture
    }

    /// Site with static files but no data files.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(default_data_dir(dir.path())).unwrap();
        fs::write(dir.path().join("index.html"), "<html>home</html>").unwrap();
        fs::create_dir_all(dir.path().join("static/css")).unwrap();
        fs::write(dir.path().join("static/css/main.css"), "body{}").unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_path(&self, file: &str) -> PathBuf {
        default_data_dir(self.root()).join(file)
    }

    pub fn write_collection(&self, file: &str, value: &Value) {
        fs::write(self.data_path(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
    }

    pub fn read_collection(&self, file: &str) -> Value {
        serde_json::from_slice(&fs::read(self.data_path(file)).unwrap()).unwrap()
    }

    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            project_root: self.root().to_path_buf(),
            data_dir: default_data_dir(self.root()),
            request_timeout_secs: 30,
        }
    }

    /// The full application router, with the production middleware stack.
    pub fn app(&self) -> Router {
        let config = self.config();
        build_app_router(AppState::new(config.clone()), &config)
    }
}

pub fn default_projects() -> Value {
    json!([
        {"id": 1, "title": "Portfolio", "category_id": 1, "content": "site", "url": "/", "tags": "web", "status": "published", "created_at": "2024-01-01 10:00:00", "updated_at": "2024-01-01 10:00:00"}
    ])
}

pub fn default_categories() -> Value {
    json!([
        {"id": 1, "name": "Web"},
        {"id": 2, "name": "Photography"}
    ])
}

pub fn default_profile() -> Value {
    json!({
        "name": "Zhou You",
        "title": "Developer",
        "bio": "Hello",
        "contact": {"email": "me@example.com", "github": "zy"},
        "skills": [{"id": 1, "name": "Rust", "level": 80}],
        "updated_at": "2024-01-01 10:00:00"
    })
}

pub fn default_articles() -> Value {
    json!([
        {"id": 1, "title": "Rust in Production", "content": "...", "author": "zy", "category_id": 1, "is_published": 1, "created_at": "2024-02-01 09:00:00"},
        {"id": 2, "title": "Film Cameras", "content": "...", "author": "zy", "category_id": 7, "is_published": 0, "created_at": "2024-03-01 09:00:00"}
    ])
}

pub fn default_photos() -> Value {
    json!([
        {"id": 1, "title": "Harbour", "description": "Dawn over the water", "image_url": "/static/img/1.jpg", "category_id": 2},
        {"id": 2, "title": "Street", "description": null, "image_url": "/static/img/2.jpg", "category_id": 2}
    ])
}

pub fn default_messages() -> Value {
    json!([
        {"id": 1, "name": "Li", "email": "li@example.com", "content": "Nice site", "ip_address": "10.0.0.1", "is_read": 0, "created_at": "2024-04-01 12:00:00"},
        {"id": 2, "name": "Wang", "email": "wang@example.com", "content": "Hire me", "ip_address": "10.0.0.2", "is_read": 1, "created_at": "2024-04-02 12:00:00"}
    ])
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
