// ==========================================
// B-chain 补货助手 - 领域模型层
// ==========================================
// 职责: 定义输入表、补货建议、数据质量报告
// 红线: 不含文件读取逻辑，不含引擎逻辑
// ==========================================

pub mod consumption;
pub mod dq;
pub mod inventory;
pub mod recommendation;
pub mod types;

// 重导出核心类型
pub use consumption::{ConsumptionRecord, ConsumptionTable};
pub use dq::{DqReport, DqSummary, DqViolation};
pub use inventory::{InventoryRecord, InventoryTable};
pub use recommendation::{RecommendationRow, RestockReport, RestockWindow};
pub use types::{DqLevel, TableKind, TrendDirection, WindowCoverage};
