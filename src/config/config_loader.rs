// ==========================================
// B-chain 补货助手 - 配置加载
// ==========================================
// 来源: JSON 文件（可选），缺省段落使用默认值
// 默认位置: <config_dir>/bchain-restock/config.json
// ==========================================

use crate::config::catalog::ItemCatalog;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::restock_params::RestockParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "bchain-restock";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: ItemCatalog,
    pub params: RestockParams,
}

impl AppConfig {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 显式指定的配置文件；None 时尝试默认位置
    ///
    /// # 规则
    /// - 显式指定但文件不存在 → 报错
    /// - 默认位置不存在 → 使用内置默认值
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => {
                    tracing::debug!("未找到配置文件，使用内置默认配置");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取（不做校验）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), items = config.catalog.items.len(), "已加载配置文件");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog.validate()?;
        self.params.validate()
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
