//! Static asset serving from the project root.
//!
//! No directory listings, range requests or cache headers. A missing file
//! is a 404 and any other read failure a 500, both with a minimal HTML
//! body.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::extract::rejection::PathRejection;
use axum::extract::{Path as UrlPath, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::mime::content_type_for;

use crate::state::AppState;

/// File served for `/`.
pub const INDEX_FILE: &str = "index.html";

const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";
const READ_ERROR_BODY: &str = "<h1>500 Internal Server Error</h1>";

/// Body served at the dev-server client path so browsers with a cached
/// dev-server page do not log 404s.
pub const VITE_CLIENT_STUB: &str = "// Vite client stub - not needed in production";

/// ANY /
pub async fn serve_index(State(state): State<AppState>) -> Response {
    serve(&state.config.project_root, INDEX_FILE).await
}

/// ANY /{*path} -- `path` arrives percent-decoded. A path that does not
/// decode to UTF-8 cannot name a file we serve.
pub async fn serve_path(
    State(state): State<AppState>,
    path: Result<UrlPath<String>, PathRejection>,
) -> Response {
    match path {
        Ok(UrlPath(path)) => serve(&state.config.project_root, &path).await,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Undecodable static path");
            not_found()
        }
    }
}

/// ANY /@vite/client
pub async fn vite_client_stub() -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "application/javascript")],
        VITE_CLIENT_STUB,
    )
        .into_response()
}

/// Map a decoded request path onto a file below `root`.
///
/// Returns `None` for paths that would leave the root (`..`, absolute
/// components) or that name nothing.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    let mut any = false;
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                any = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    any.then_some(resolved)
}

async fn serve(root: &Path, request_path: &str) -> Response {
    tracing::info!(path = %request_path, "Static request");

    let Some(file_path) = resolve(root, request_path) else {
        tracing::warn!(path = %request_path, "Rejected static path");
        return not_found();
    };

    match tokio::fs::metadata(&file_path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return not_found(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(file = %file_path.display(), "File not found");
            return not_found();
        }
        Err(e) => return read_error(&file_path, &e),
    }

    match tokio::fs::read(&file_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(CONTENT_TYPE, content_type_for(&file_path))],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => not_found(),
        Err(e) => read_error(&file_path, &e),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, "text/html")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

fn read_error(file_path: &Path, err: &std::io::Error) -> Response {
    tracing::error!(file = %file_path.display(), error = %err, "Error reading file");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, "text/html")],
        READ_ERROR_BODY,
    )
        .into_response()
}
