use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported snapshot file {0:?}, expected .json or .bincode")]
    UnsupportedSnapshot(PathBuf),

    #[error("invalid log specification: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
