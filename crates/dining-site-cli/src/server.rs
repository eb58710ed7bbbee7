//! Static file server for the built site, plus `/health`.

use std::path::{Path, PathBuf};

use axum::response::Json as AxumJson;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{CliError, CliResult};

/// Serves a site directory over HTTP.
pub struct SiteServer {
    site_dir: PathBuf,
}

impl SiteServer {
    /// Create a server for `site_dir`, which must exist.
    pub fn new(site_dir: &Path) -> CliResult<Self> {
        if !site_dir.is_dir() {
            return Err(CliError::SiteDirMissing(site_dir.to_path_buf()));
        }
        Ok(Self {
            site_dir: site_dir.to_path_buf(),
        })
    }

    /// Build the router: files from the site directory, `index.html` for
    /// directory requests, 404 for anything missing.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .fallback_service(ServeDir::new(&self.site_dir))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the HTTP server on `host:port` until the process is stopped.
    pub async fn run(&self, host: &str, port: u16) -> CliResult<()> {
        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Serving {} on http://{addr}", self.site_dir.display());

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Health check endpoint.
async fn handle_health() -> AxumJson<serde_json::Value> {
    AxumJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
