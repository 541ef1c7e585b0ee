use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpatialError {
    #[error("Cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpatialError>;
