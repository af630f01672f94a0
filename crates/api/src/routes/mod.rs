pub mod health;

use axum::routing::any;
use axum::Router;

use crate::handlers::{dispatch, static_files};
use crate::state::AppState;

/// Request paths answered by the action dispatcher.
pub const API_PATHS: &[&str] = &["/api.php", "/admin/api.php"];

/// Dev-server client path answered with a stub script.
pub const VITE_CLIENT_PATH: &str = "/@vite/client";

/// Build the site route tree. Every route answers any method.
///
/// ```text
/// /api.php, /admin/api.php        action dispatcher
/// /@vite/client                   stub script
/// /                               index.html
/// /{*path}                        static file under the project root
/// ```
///
/// Exact paths win over the catch-all, so the API aliases never reach the
/// static resolver.
pub fn site_routes() -> Router<AppState> {
    let mut router = Router::new();
    for path in API_PATHS {
        router = router.route(path, any(dispatch::handle));
    }
    router
        .route(VITE_CLIENT_PATH, any(static_files::vite_client_stub))
        .route("/", any(static_files::serve_index))
        .route("/{*path}", any(static_files::serve_path))
}
