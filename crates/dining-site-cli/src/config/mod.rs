//! Configuration resolution: explicit flag, then environment, then default.

use std::path::PathBuf;

/// Environment variable naming the site API base URL.
pub const API_URL_ENV: &str = "DINING_API_URL";

/// Environment variable naming the directory `serve` publishes.
pub const SITE_DIR_ENV: &str = "DINING_SITE_DIR";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SITE_DIR: &str = "site";

/// Resolve the site API base URL.
pub fn resolve_api_base(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(env_url) = std::env::var(API_URL_ENV) {
        if !env_url.trim().is_empty() {
            return env_url;
        }
    }

    DEFAULT_API_URL.to_string()
}

/// Resolve the directory holding the built site.
pub fn resolve_site_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit {
        return PathBuf::from(dir);
    }

    if let Ok(env_dir) = std::env::var(SITE_DIR_ENV) {
        if !env_dir.trim().is_empty() {
            return PathBuf::from(env_dir);
        }
    }

    PathBuf::from(DEFAULT_SITE_DIR)
}
