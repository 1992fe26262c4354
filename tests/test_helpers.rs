// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造消耗表/库存表、写临时 CSV 文件
// ==========================================

#![allow(dead_code)]

use bchain_restock::config::{ItemCatalog, TrackedItem};
use bchain_restock::domain::{ConsumptionRecord, ConsumptionTable, InventoryRecord, InventoryTable};
use chrono::{Duration, NaiveDate};
use std::io::Write;
use tempfile::NamedTempFile;

/// 测试数据起始日期
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// 第 n 天（从 0 开始）
pub fn day(n: usize) -> NaiveDate {
    start_date() + Duration::days(n as i64)
}

/// 单物品目录: 物品 "A"，消耗列 "A消耗"，库存键 "A"
pub fn single_item_catalog() -> ItemCatalog {
    ItemCatalog::with_items(vec![TrackedItem::new("A", "Item A", "A消耗", "A")])
}

/// 双物品目录: "A" / "B"
pub fn two_item_catalog() -> ItemCatalog {
    ItemCatalog::with_items(vec![
        TrackedItem::new("A", "Item A", "A消耗", "A"),
        TrackedItem::new("B", "Item B", "B消耗", "B"),
    ])
}

/// 按天构造单列消耗表，第 i 个值对应 day(i)
pub fn daily_table(column: &str, values: &[f64]) -> ConsumptionTable {
    let records = values
        .iter()
        .enumerate()
        .map(|(i, v)| ConsumptionRecord::new(day(i)).with_quantity(column, *v))
        .collect();
    ConsumptionTable::from_records(records)
}

/// 按天构造多列消耗表
pub fn multi_column_table(columns: &[(&str, &[f64])]) -> ConsumptionTable {
    let days = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    let records = (0..days)
        .map(|i| {
            columns.iter().fold(ConsumptionRecord::new(day(i)), |rec, (col, values)| {
                rec.with_quantity(*col, values.get(i).copied().unwrap_or(0.0))
            })
        })
        .collect();
    ConsumptionTable::from_records(records)
}

/// 两个 14 天窗口: week1 合计 w1 放在第 0 天，week2 合计 w2 放在第 14 天
pub fn two_window_values(w1: f64, w2: f64) -> Vec<f64> {
    let mut values = vec![0.0; 28];
    values[0] = w1;
    values[14] = w2;
    values
}

pub fn inventory(rows: &[(&str, f64, f64)]) -> InventoryTable {
    InventoryTable::new(
        rows.iter()
            .map(|(name, on_hand, in_transit)| InventoryRecord::new(*name, *on_hand, *in_transit))
            .collect(),
    )
}

/// 写临时文件（保持返回值存活）
pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// 默认目录表头的消耗 CSV，五个物品每天用量相同
///
/// daily(i) 返回第 i 天的用量
pub fn default_consumption_csv(days: usize, daily: impl Fn(usize) -> f64) -> String {
    let mut csv = String::from("日期,五件套消耗,感谢卡消耗,飞机袋消耗,达人信消耗,引流卡消耗\n");
    for i in 0..days {
        let q = daily(i);
        csv.push_str(&format!("{},{q},{q},{q},{q},{q}\n", day(i).format("%Y-%m-%d")));
    }
    csv
}

/// 默认目录表头的库存 CSV
pub fn default_inventory_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("耗材物品,在仓数量,在途数量\n");
    for (name, on_hand, in_transit) in rows {
        csv.push_str(&format!("{name},{on_hand},{in_transit}\n"));
    }
    csv
}
