use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the codelaunch CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Scan cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch IDE: {0}")]
    Launch(String),

    #[error("Failed to open editor: {0}")]
    Editor(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }

    pub fn launch<S: Into<String>>(msg: S) -> Self {
        AppError::Launch(msg.into())
    }
}
