use std::path::PathBuf;

use thiserror::Error;

/// Startup-time failures. Frames themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
