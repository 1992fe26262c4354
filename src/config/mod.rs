// ==========================================
// B-chain 补货助手 - 配置层
// ==========================================
// 职责: 补货参数、物品目录、配置文件加载
// 存储: 无（JSON 文件只读）
// ==========================================

pub mod catalog;
pub mod config_loader;
pub mod error;
pub mod restock_params;

// 重导出核心配置类型
pub use catalog::{ItemCatalog, TrackedItem};
pub use config_loader::{default_config_path, AppConfig};
pub use error::{ConfigError, ConfigResult};
pub use restock_params::{RestockParams, MAX_DAILY_AVG_DAYS, MAX_STAGE_DAYS, MIN_DAILY_AVG_DAYS};
