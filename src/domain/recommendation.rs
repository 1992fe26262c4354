// ==========================================
// B-chain 补货助手 - 补货建议结果
// ==========================================
// 每次调用重新计算，不持久化
// ==========================================

use crate::config::RestockParams;
use crate::domain::types::WindowCoverage;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RecommendationRow - 单个物品的补货建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub item_id: String,
    pub display_name: String,

    // 双周合计
    pub week1_total: f64,
    pub week2_total: f64,

    // 增长
    pub growth_rate_pct: f64,
    pub zero_baseline: bool,          // week1 为 0，分母按 1 代入
    pub daily_average: f64,
    pub raw_growth_multiplier: f64,   // 平滑前
    pub growth_multiplier: f64,       // 平滑后
    pub growth_dampened: bool,        // 是否被整体增长系数替换

    // 补货
    pub restock_qty: i64,
    pub stock_on_hand_total: f64,     // 在仓 + 在途
    pub needs_restock: bool,
    pub suggested_reorder_qty: i64,
}

// ==========================================
// RestockWindow - 双周窗口元信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockWindow {
    pub start: NaiveDate,          // 窗口首日
    pub split: NaiveDate,          // week2 首日（week2 为空时等于 end）
    pub end: NaiveDate,            // 窗口末日
    pub week1_days: usize,
    pub week2_days: usize,
    pub coverage: WindowCoverage,
}

// ==========================================
// RestockReport - 一次完整计算的输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub params: RestockParams,
    pub total_lead_days: u32,
    pub window: RestockWindow,
    pub overall_growth_multiplier: f64,
    pub rows: Vec<RecommendationRow>,
}

impl RestockReport {
    /// 需要补货的物品
    pub fn items_needing_restock(&self) -> impl Iterator<Item = &RecommendationRow> {
        self.rows.iter().filter(|r| r.needs_restock)
    }

    /// 按物品 ID 查找
    pub fn row(&self, item_id: &str) -> Option<&RecommendationRow> {
        self.rows.iter().find(|r| r.item_id == item_id)
    }
}
