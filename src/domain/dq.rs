// ==========================================
// B-chain 补货助手 - 数据质量报告
// ==========================================
// 稀疏数据不是错误，但必须在报告中可见
// ==========================================

use crate::domain::types::{DqLevel, TableKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub table: TableKind,          // 所属表
    pub row_number: Option<usize>, // 原始文件行号（表级问题为 None）
    pub level: DqLevel,            // 违规级别
    pub field: String,             // 违规字段
    pub message: String,           // 违规描述
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize, // 总行数
    pub error: usize,      // ERROR
    pub warning: usize,    // WARNING
    pub info: usize,       // INFO
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqReport {
    pub batch_id: String,
    pub table: TableKind,
    pub summary: DqSummary,
    pub violations: Vec<DqViolation>,
}

impl DqReport {
    /// 汇总违规明细
    pub fn new(batch_id: String, table: TableKind, total_rows: usize, violations: Vec<DqViolation>) -> Self {
        let count = |level: DqLevel| violations.iter().filter(|v| v.level == level).count();
        let summary = DqSummary {
            total_rows,
            error: count(DqLevel::Error),
            warning: count(DqLevel::Warning),
            info: count(DqLevel::Info),
        };
        Self {
            batch_id,
            table,
            summary,
            violations,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_level(&self, level: DqLevel) -> bool {
        self.violations.iter().any(|v| v.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_levels() {
        let violation = |level| DqViolation {
            table: TableKind::Inventory,
            row_number: None,
            level,
            field: "耗材物品".to_string(),
            message: "test".to_string(),
        };
        let report = DqReport::new(
            "batch".to_string(),
            TableKind::Inventory,
            3,
            vec![violation(DqLevel::Warning), violation(DqLevel::Info), violation(DqLevel::Warning)],
        );
        assert_eq!(report.summary.total_rows, 3);
        assert_eq!(report.summary.warning, 2);
        assert_eq!(report.summary.info, 1);
        assert_eq!(report.summary.error, 0);
        assert!(report.has_level(DqLevel::Info));
        assert!(!report.is_clean());
    }
}
