//! Errors surfaced by the command-line tools.

use std::path::PathBuf;

use dining_site::TransportError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("site/ folder not found at {}. Add your built files first.", .0.display())]
    SiteDirMissing(PathBuf),

    #[error("Invalid field {0:?}: expected name=value")]
    InvalidField(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
