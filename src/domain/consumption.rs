// ==========================================
// B-chain 补货助手 - 消耗记录
// ==========================================
// 一行 = 一个日历日，每个耗材一列消耗量
// 列名由物品目录配置，不在此处写死
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ==========================================
// ConsumptionRecord - 单日消耗记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    pub date: NaiveDate,                  // 日期（仅用于排序）
    pub quantities: HashMap<String, f64>, // 消耗列名 → 消耗量
    #[serde(default)]
    pub row_number: usize,                // 原始文件行号（内存构造时为 0）
}

impl ConsumptionRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            quantities: HashMap::new(),
            row_number: 0,
        }
    }

    /// 链式设置某列消耗量
    pub fn with_quantity(mut self, column: impl Into<String>, quantity: f64) -> Self {
        self.quantities.insert(column.into(), quantity);
        self
    }

    /// 读取某列消耗量，空单元格按 0 计
    pub fn quantity(&self, column: &str) -> f64 {
        self.quantities.get(column).copied().unwrap_or(0.0)
    }
}

// ==========================================
// ConsumptionTable - 消耗记录表
// ==========================================
// columns 记录源表实际存在的列，用于区分"列缺失"与"单元格为空"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionTable {
    pub columns: Vec<String>,
    pub records: Vec<ConsumptionRecord>,
}

impl ConsumptionTable {
    pub fn new(columns: Vec<String>, records: Vec<ConsumptionRecord>) -> Self {
        Self { columns, records }
    }

    /// 由记录推导列集合（内存调用方使用）
    pub fn from_records(records: Vec<ConsumptionRecord>) -> Self {
        let columns: BTreeSet<String> = records
            .iter()
            .flat_map(|r| r.quantities.keys().cloned())
            .collect();
        Self {
            columns: columns.into_iter().collect(),
            records,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_missing_cell_counts_as_zero() {
        let record = ConsumptionRecord::new(day(1)).with_quantity("五件套消耗", 12.0);
        assert_eq!(record.quantity("五件套消耗"), 12.0);
        assert_eq!(record.quantity("感谢卡消耗"), 0.0);
    }

    #[test]
    fn test_from_records_collects_columns() {
        let table = ConsumptionTable::from_records(vec![
            ConsumptionRecord::new(day(1)).with_quantity("a", 1.0),
            ConsumptionRecord::new(day(2)).with_quantity("b", 2.0),
        ]);
        assert_eq!(table.columns, vec!["a".to_string(), "b".to_string()]);
        assert!(table.has_column("a"));
        assert!(!table.has_column("c"));
        assert_eq!(table.len(), 2);
    }
}
