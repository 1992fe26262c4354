// ==========================================
// B-chain 补货助手 - 引擎层
// ==========================================
// 职责: 补货建议计算 + 趋势摘要
// 红线: 引擎不读文件，所有输入为内存结构
// ==========================================

pub mod error;
pub mod restock;
pub mod trend_summary;
pub mod window;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use restock::{RestockEngine, DAMPENING_THRESHOLD};
pub use trend_summary::{ChartSeries, ComparisonChart, TrendNarrative, TrendSummaryEngine};
pub use window::{ConsumptionWindow, TRAILING_RECORDS, WINDOW_DAYS};
