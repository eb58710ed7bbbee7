//! Dining site CLI — static site server, content preview and form submission.

pub mod commands;
pub mod config;
pub mod error;
#[cfg(feature = "serve")]
pub mod server;

pub use commands::{parse_field, preview, submit};
pub use config::{resolve_api_base, resolve_site_dir};
pub use error::{CliError, CliResult};
#[cfg(feature = "serve")]
pub use server::SiteServer;
