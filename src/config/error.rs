// ==========================================
// B-chain 补货助手 - 配置错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置参数无效 ({field}): {message}")]
    InvalidParam { field: String, message: String },

    #[error("物品目录无效: {0}")]
    InvalidCatalog(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
