use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running from the site checkout.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Directory static assets are served from (default: `.`).
    pub project_root: PathBuf,
    /// Directory holding the JSON collection files
    /// (default: `<project_root>/admin/data`).
    pub data_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `PROJECT_ROOT`         | `.`                        |
    /// | `DATA_DIR`             | `<PROJECT_ROOT>/admin/data`|
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let project_root = PathBuf::from(std::env::var("PROJECT_ROOT").unwrap_or_else(|_| ".".into()));

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir(&project_root));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            project_root,
            data_dir,
            request_timeout_secs,
        }
    }
}

/// Where the admin front-end keeps its JSON files relative to the site.
pub fn default_data_dir(project_root: &std::path::Path) -> PathBuf {
    project_root.join("admin").join("data")
}
