// ==========================================
// B-chain 补货助手 - API 层
// ==========================================
// 职责: 提供业务 API 接口，供 CLI 或其他展示层调用
// ==========================================

pub mod error;
pub mod restock_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use restock_api::{RestockApi, RestockRun};
