// ==========================================
// B-chain 补货助手 - 趋势摘要引擎
// ==========================================
// 职责: 由补货报告生成
//   - 每个物品的双周趋势描述
//   - 双周对比图数据（供任意图表层渲染）
//   - Markdown 文本报告（多语言）
// 红线: 无状态引擎，只读报告，不重新计算
// ==========================================

use crate::domain::types::TrendDirection;
use crate::domain::{RecommendationRow, RestockReport, WindowCoverage};
use crate::i18n::{t_in, t_in_with_args};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

// ==========================================
// TrendNarrative - 单个物品的趋势描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendNarrative {
    pub item_id: String,
    pub display_name: String,
    pub week1_total: f64,
    pub week2_total: f64,
    pub direction: TrendDirection,
    /// |week2 - week1| / week1 × 100；week1 为 0 时为 0
    pub change_pct: f64,
}

// ==========================================
// ComparisonChart - 双周对比柱状图数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    pub title: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

pub struct TrendSummaryEngine;

impl TrendSummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 生成每个物品的趋势描述（顺序同报告）
    pub fn summarize(&self, report: &RestockReport) -> Vec<TrendNarrative> {
        report.rows.iter().map(Self::narrative).collect()
    }

    fn narrative(row: &RecommendationRow) -> TrendNarrative {
        let change_pct = if row.week1_total != 0.0 {
            ((row.week2_total - row.week1_total) / row.week1_total * 100.0).abs()
        } else {
            0.0
        };

        TrendNarrative {
            item_id: row.item_id.clone(),
            display_name: row.display_name.clone(),
            week1_total: row.week1_total,
            week2_total: row.week2_total,
            direction: TrendDirection::between(row.week1_total, row.week2_total),
            change_pct,
        }
    }

    /// 生成双周对比图数据
    ///
    /// 系列标签: "start - split" / "split - end"
    pub fn comparison_chart(&self, report: &RestockReport, locale: &str) -> ComparisonChart {
        let w = &report.window;
        let start = w.start.to_string();
        let split = w.split.to_string();
        let end = w.end.to_string();

        ComparisonChart {
            title: t_in_with_args(
                locale,
                "report.usage_comparison",
                &[("start", &start), ("end", &end)],
            ),
            y_label: t_in(locale, "report.quantity"),
            categories: report.rows.iter().map(|r| r.display_name.clone()).collect(),
            series: vec![
                ChartSeries {
                    label: format!("{} - {}", start, split),
                    values: report.rows.iter().map(|r| r.week1_total).collect(),
                },
                ChartSeries {
                    label: format!("{} - {}", split, end),
                    values: report.rows.iter().map(|r| r.week2_total).collect(),
                },
            ],
        }
    }

    /// 渲染 Markdown 文本报告
    ///
    /// 顺序: 补货建议表 → 双周对比描述
    pub fn render_markdown(&self, report: &RestockReport, locale: &str) -> String {
        let w = &report.window;
        let start = w.start.to_string();
        let split = w.split.to_string();
        let end = w.end.to_string();
        let mut out = String::new();

        let _ = writeln!(out, "## {}\n", t_in(locale, "report.title"));
        let _ = writeln!(
            out,
            "{}\n",
            t_in_with_args(
                locale,
                "report.lead_days",
                &[
                    ("days", &report.total_lead_days.to_string()),
                    ("production", &report.params.production_days.to_string()),
                    ("shipping", &report.params.shipping_days.to_string()),
                    ("safety", &report.params.safety_days.to_string()),
                ],
            )
        );
        if w.coverage == WindowCoverage::Partial {
            let _ = writeln!(
                out,
                "> {}\n",
                t_in_with_args(
                    locale,
                    "report.partial_window",
                    &[
                        ("week1", &w.week1_days.to_string()),
                        ("week2", &w.week2_days.to_string()),
                    ],
                )
            );
        }
        Self::write_recommendation_table(&mut out, report, locale);

        let _ = writeln!(out, "\n## {}\n", t_in(locale, "report.comparison_title"));
        let previous_days = w.week1_days.to_string();
        for n in self.summarize(report) {
            let _ = writeln!(out, "**{}:**", n.item_id);
            let _ = writeln!(
                out,
                "- {}",
                t_in_with_args(
                    locale,
                    "report.window_usage",
                    &[("start", &start), ("end", &split), ("value", &format_quantity(n.week1_total))],
                )
            );
            let _ = writeln!(
                out,
                "- {}",
                t_in_with_args(
                    locale,
                    "report.window_usage",
                    &[("start", &split), ("end", &end), ("value", &format_quantity(n.week2_total))],
                )
            );
            let _ = writeln!(
                out,
                "- {}\n",
                t_in_with_args(
                    locale,
                    "report.trend",
                    &[
                        ("days", &previous_days),
                        ("direction", &t_in(locale, n.direction.i18n_key())),
                        ("pct", &format!("{:.2}", n.change_pct)),
                    ],
                )
            );
        }

        out
    }

    /// 补货建议表（每个物品一行，顺序同报告）
    fn write_recommendation_table(out: &mut String, report: &RestockReport, locale: &str) {
        let dampened = t_in(locale, "report.dampened");
        let (yes, no) = (t_in(locale, "report.yes"), t_in(locale, "report.no"));

        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            t_in(locale, "report.item"),
            t_in(locale, "report.growth_multiplier"),
            t_in(locale, "report.restock_qty"),
            t_in(locale, "report.stock_total"),
            t_in(locale, "report.needs_restock"),
            t_in(locale, "report.suggested_qty"),
        );
        let _ = writeln!(out, "|---|---:|---:|---:|:---:|---:|");
        for r in &report.rows {
            let multiplier = if r.growth_dampened {
                format!("{:.4} ({})", r.growth_multiplier, dampened)
            } else {
                format!("{:.4}", r.growth_multiplier)
            };
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                r.item_id,
                multiplier,
                r.restock_qty,
                format_quantity(r.stock_on_hand_total),
                if r.needs_restock { &yes } else { &no },
                r.suggested_reorder_qty,
            );
        }
    }
}

impl Default for TrendSummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 数量展示: 整数不带小数，否则保留两位
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(150.0), "150");
        assert_eq!(format_quantity(10.714285), "10.71");
        assert_eq!(format_quantity(0.0), "0");
    }
}
