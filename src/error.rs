use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurlpostError {
    #[error("fixture 目录不存在: {}", .0.display())]
    FixtureRootMissing(PathBuf),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<toml::de::Error> for CurlpostError {
    fn from(err: toml::de::Error) -> Self {
        CurlpostError::ConfigError(err.to_string())
    }
}

/// Result type for curlpost crate
pub type Result<T> = std::result::Result<T, CurlpostError>;
