// ==========================================
// B-chain 补货助手 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 窗口覆盖度 (Window Coverage)
// ==========================================
// 历史记录不足 28 条时窗口会缩短，结果中必须可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowCoverage {
    Full,    // 14 + 14 条完整
    Partial, // 记录不足，窗口缩短
}

impl fmt::Display for WindowCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCoverage::Full => write!(f, "FULL"),
            WindowCoverage::Partial => write!(f, "PARTIAL"),
        }
    }
}

// ==========================================
// 消耗趋势 (Trend Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Increased, // 增长
    Decreased, // 下降
    Stable,    // 持平
}

impl TrendDirection {
    /// 根据两个窗口的合计判定趋势
    pub fn between(week1_total: f64, week2_total: f64) -> Self {
        if week2_total > week1_total {
            TrendDirection::Increased
        } else if week2_total < week1_total {
            TrendDirection::Decreased
        } else {
            TrendDirection::Stable
        }
    }

    /// i18n 文案键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TrendDirection::Increased => "report.increased",
            TrendDirection::Decreased => "report.decreased",
            TrendDirection::Stable => "report.stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increased => write!(f, "INCREASED"),
            TrendDirection::Decreased => write!(f, "DECREASED"),
            TrendDirection::Stable => write!(f, "STABLE"),
        }
    }
}

// ==========================================
// 数据质量级别 (DQ Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Info,    // 提示（仅记录）
    Warning, // 警告（降级处理，计算继续）
    Error,   // 错误（计算无法进行）
}

impl fmt::Display for DqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqLevel::Info => write!(f, "INFO"),
            DqLevel::Warning => write!(f, "WARNING"),
            DqLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ==========================================
// 数据表类型 (Table Kind)
// ==========================================
// 用于错误与 DQ 报告中指明是哪张表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableKind {
    Consumption, // 消耗记录表
    Inventory,   // 库存表
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Consumption => write!(f, "消耗表"),
            TableKind::Inventory => write!(f, "库存表"),
        }
    }
}
