// ==========================================
// B-chain 补货助手 - 核心库
// ==========================================
// 输入: 每日耗材消耗记录 + 库存快照
// 输出: 每个耗材的建议补货量 + 双周趋势摘要
// 系统定位: 决策支持 (人工最终下单)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 输入表与结果
pub mod domain;

// 引擎层 - 补货计算与趋势摘要
pub mod engine;

// 导入层 - 外部表格
pub mod importer;

// 配置层 - 物品目录与参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 命令行
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DqLevel, TableKind, TrendDirection, WindowCoverage};

// 领域实体
pub use domain::{
    ConsumptionRecord, ConsumptionTable, DqReport, InventoryRecord, InventoryTable,
    RecommendationRow, RestockReport, RestockWindow,
};

// 配置
pub use config::{AppConfig, ItemCatalog, RestockParams, TrackedItem};

// 引擎
pub use engine::{RestockEngine, TrendSummaryEngine};

// 导入
pub use importer::RestockImporter;

// API
pub use api::{ApiError, RestockApi, RestockRun};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "B-chain 补货助手";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
