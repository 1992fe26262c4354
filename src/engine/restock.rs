// ==========================================
// B-chain 补货助手 - 补货建议引擎
// ==========================================
// 职责: 消耗历史 + 库存快照 → 每个物品的建议补货量
// 输入: ConsumptionTable + InventoryTable + ItemCatalog + RestockParams
// 输出: RestockReport / Vec<RecommendationRow>
// ==========================================
// 计算流程:
// 1. 按日期排序，取最后 28 条，切分 week1 / week2
// 2. 按物品求两个窗口合计
// 3. 增长率 / 日均 / 增长系数
// 4. 平滑: 增长系数 > 1.9 的物品改用整体增长系数
// 5. 补货需求量 = round(日均 × 覆盖天数 × 增长系数)
// 6. 库存合计 = 在仓 + 在途（无记录按 0）
// 7. 建议补货量 = max(0, 补货需求量 - 库存合计)
// ==========================================
// 红线: 无状态引擎，纯函数，不做 I/O
// ==========================================

use crate::config::{ItemCatalog, RestockParams, TrackedItem};
use crate::domain::{
    ConsumptionTable, InventoryTable, RecommendationRow, RestockReport,
};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::window::ConsumptionWindow;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// 单品增长系数超过该值时视为异常，改用整体增长系数
pub const DAMPENING_THRESHOLD: f64 = 1.9;

// ==========================================
// RestockEngine - 补货建议引擎
// ==========================================
#[derive(Debug, Default)]
pub struct RestockEngine;

impl RestockEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算补货建议（仅返回结果行）
    pub fn compute_recommendations(
        &self,
        consumption: &ConsumptionTable,
        inventory: &InventoryTable,
        catalog: &ItemCatalog,
        params: &RestockParams,
    ) -> EngineResult<Vec<RecommendationRow>> {
        self.evaluate(consumption, inventory, catalog, params)
            .map(|report| report.rows)
    }

    /// 计算补货建议（含窗口信息与整体增长系数）
    ///
    /// # 错误
    /// - EmptyConsumptionHistory: 消耗表无记录
    /// - MissingConsumptionColumn: 目录中的消耗列在表中不存在
    /// - InvalidConfig: 参数或目录校验失败
    #[instrument(skip_all, fields(records = consumption.len(), items = catalog.items.len()))]
    pub fn evaluate(
        &self,
        consumption: &ConsumptionTable,
        inventory: &InventoryTable,
        catalog: &ItemCatalog,
        params: &RestockParams,
    ) -> EngineResult<RestockReport> {
        catalog.validate()?;
        params.validate()?;

        for item in &catalog.items {
            if !consumption.has_column(&item.consumption_column) {
                return Err(EngineError::MissingConsumptionColumn {
                    item_id: item.item_id.clone(),
                    column: item.consumption_column.clone(),
                });
            }
        }

        let window = ConsumptionWindow::split(&consumption.records)
            .ok_or(EngineError::EmptyConsumptionHistory)?;
        let window_meta = window.describe();
        if window.len() < consumption.len() {
            debug!(
                dropped = consumption.len() - window.len(),
                "早于窗口的历史记录不参与计算"
            );
        }

        let total_lead_days = params.total_lead_days();

        // 1~3. 窗口合计 + 增长率 + 日均
        let mut rows: Vec<RecommendationRow> = catalog
            .items
            .iter()
            .map(|item| self.base_row(item, &window, params))
            .collect();

        // 4. 平滑
        let overall_growth_multiplier = Self::overall_growth_multiplier(&rows);
        Self::apply_dampening(&mut rows, overall_growth_multiplier);

        // 5~7. 补货需求量 / 库存 / 建议补货量
        for (row, item) in rows.iter_mut().zip(&catalog.items) {
            row.restock_qty =
                Self::restock_qty(row.daily_average, total_lead_days, row.growth_multiplier);

            row.stock_on_hand_total = match inventory.find_stock_total(&item.inventory_key) {
                Some(total) => total,
                None => {
                    warn!(item = %item.item_id, key = %item.inventory_key, "库存表无匹配记录，库存按 0 计");
                    0.0
                }
            };

            let (needs_restock, suggested) =
                Self::shortfall(row.restock_qty, row.stock_on_hand_total);
            row.needs_restock = needs_restock;
            row.suggested_reorder_qty = suggested;
        }

        info!(
            start = %window_meta.start,
            end = %window_meta.end,
            coverage = %window_meta.coverage,
            need_restock = rows.iter().filter(|r| r.needs_restock).count(),
            "补货建议计算完成"
        );

        Ok(RestockReport {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            params: *params,
            total_lead_days,
            window: window_meta,
            overall_growth_multiplier,
            rows,
        })
    }

    // ==========================================
    // 分步计算
    // ==========================================

    /// 构造未平滑、未查库存的结果行
    fn base_row(
        &self,
        item: &TrackedItem,
        window: &ConsumptionWindow<'_>,
        params: &RestockParams,
    ) -> RecommendationRow {
        let week1_total = window.week1_total(&item.consumption_column);
        let week2_total = window.week2_total(&item.consumption_column);
        let (growth_rate_pct, zero_baseline) = Self::growth_rate_pct(week1_total, week2_total);
        if zero_baseline {
            debug!(item = %item.item_id, week2_total, "week1 为 0，增长率分母按 1 代入");
        }
        let raw_growth_multiplier = 1.0 + growth_rate_pct / 100.0;

        RecommendationRow {
            item_id: item.item_id.clone(),
            display_name: item.display_name.clone(),
            week1_total,
            week2_total,
            growth_rate_pct,
            zero_baseline,
            daily_average: week2_total / params.daily_avg_days as f64,
            raw_growth_multiplier,
            growth_multiplier: raw_growth_multiplier,
            growth_dampened: false,
            restock_qty: 0,
            stock_on_hand_total: 0.0,
            needs_restock: false,
            suggested_reorder_qty: 0,
        }
    }

    /// 增长率（%）
    ///
    /// week1 为 0 时分母按 1 代入（近似值，非真实百分比）
    ///
    /// # 返回
    /// - (growth_rate_pct, zero_baseline)
    pub fn growth_rate_pct(week1_total: f64, week2_total: f64) -> (f64, bool) {
        let zero_baseline = week1_total == 0.0;
        let divisor = if zero_baseline { 1.0 } else { week1_total };
        ((week2_total - week1_total) / divisor * 100.0, zero_baseline)
    }

    /// 整体增长系数 = 1 + 各物品增长率均值 / 100
    pub fn overall_growth_multiplier(rows: &[RecommendationRow]) -> f64 {
        if rows.is_empty() {
            return 1.0;
        }
        let mean = rows.iter().map(|r| r.growth_rate_pct).sum::<f64>() / rows.len() as f64;
        1.0 + mean / 100.0
    }

    /// 平滑: 单品增长系数严格大于阈值时替换为整体增长系数
    fn apply_dampening(rows: &mut [RecommendationRow], overall: f64) {
        for row in rows.iter_mut() {
            if row.raw_growth_multiplier > DAMPENING_THRESHOLD {
                debug!(
                    item = %row.item_id,
                    raw = row.raw_growth_multiplier,
                    overall,
                    "增长系数超过阈值，改用整体增长系数"
                );
                row.growth_multiplier = overall;
                row.growth_dampened = true;
            }
        }
    }

    /// 补货需求量 = round(日均 × 覆盖天数 × 增长系数)，四舍六入五成双
    pub fn restock_qty(daily_average: f64, total_lead_days: u32, growth_multiplier: f64) -> i64 {
        (daily_average * total_lead_days as f64 * growth_multiplier).round_ties_even() as i64
    }

    /// 缺口计算
    ///
    /// # 返回
    /// - (needs_restock, suggested_reorder_qty)
    /// - 建议量为差值向零取整，永不为负
    pub fn shortfall(restock_qty: i64, stock_on_hand_total: f64) -> (bool, i64) {
        let needs_restock = restock_qty as f64 > stock_on_hand_total;
        let suggested = if needs_restock {
            ((restock_qty as f64 - stock_on_hand_total).trunc() as i64).max(0)
        } else {
            0
        };
        (needs_restock, suggested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_rate_zero_baseline() {
        assert_eq!(RestockEngine::growth_rate_pct(0.0, 10.0), (1000.0, true));
        assert_eq!(RestockEngine::growth_rate_pct(0.0, 0.0), (0.0, true));
    }

    #[test]
    fn test_growth_rate_regular() {
        assert_eq!(RestockEngine::growth_rate_pct(100.0, 150.0), (50.0, false));
        assert_eq!(RestockEngine::growth_rate_pct(100.0, 40.0), (-60.0, false));
    }

    #[test]
    fn test_restock_qty_rounds_half_to_even() {
        assert_eq!(RestockEngine::restock_qty(150.0 / 14.0, 35, 1.5), 562);
        assert_eq!(RestockEngine::restock_qty(1.0, 3, 1.5), 4); // 4.5 → 4
        assert_eq!(RestockEngine::restock_qty(1.0, 7, 1.5), 10); // 10.5 → 10
        assert_eq!(RestockEngine::restock_qty(1.0, 5, 1.5), 8); // 7.5 → 8
        assert_eq!(RestockEngine::restock_qty(0.0, 35, 1.2), 0);
    }

    #[test]
    fn test_shortfall() {
        assert_eq!(RestockEngine::shortfall(562, 150.0), (true, 412));
        assert_eq!(RestockEngine::shortfall(100, 100.0), (false, 0));
        assert_eq!(RestockEngine::shortfall(100, 250.0), (false, 0));
        assert_eq!(RestockEngine::shortfall(100, 99.5), (true, 0));
    }

    #[test]
    fn test_overall_multiplier_uses_raw_rates() {
        let row = |rate: f64| RecommendationRow {
            item_id: String::new(),
            display_name: String::new(),
            week1_total: 0.0,
            week2_total: 0.0,
            growth_rate_pct: rate,
            zero_baseline: false,
            daily_average: 0.0,
            raw_growth_multiplier: 1.0 + rate / 100.0,
            growth_multiplier: 1.0 + rate / 100.0,
            growth_dampened: false,
            restock_qty: 0,
            stock_on_hand_total: 0.0,
            needs_restock: false,
            suggested_reorder_qty: 0,
        };
        let rows = vec![row(50.0), row(150.0), row(-20.0), row(20.0)];
        assert!((RestockEngine::overall_growth_multiplier(&rows) - 1.5).abs() < 1e-12);
    }
}
