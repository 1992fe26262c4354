// ==========================================
// B-chain 补货助手 - 数据质量校验器实现
// ==========================================
// 职责: 导入后数据质量检查 + DQ 报告素材
// 红线: 校验只记录，不修改数据，不阻断计算
// ==========================================

use crate::config::ItemCatalog;
use crate::domain::dq::DqViolation;
use crate::domain::types::{DqLevel, TableKind};
use crate::domain::{ConsumptionTable, InventoryTable};
use crate::engine::window::TRAILING_RECORDS;
use std::collections::HashSet;

pub struct DqValidator<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> DqValidator<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    // ==========================================
    // 消耗表校验
    // ==========================================

    pub fn validate_consumption(&self, table: &ConsumptionTable) -> Vec<DqViolation> {
        let mut violations = Vec::new();

        // ERROR: 目录中的消耗列缺失（引擎将拒绝计算）
        for item in &self.catalog.items {
            if !table.has_column(&item.consumption_column) {
                violations.push(DqViolation {
                    table: TableKind::Consumption,
                    row_number: None,
                    level: DqLevel::Error,
                    field: item.consumption_column.clone(),
                    message: format!("缺少物品 {} 的消耗列", item.item_id),
                });
            }
        }

        // WARNING: 记录不足，窗口将缩短
        if table.len() < TRAILING_RECORDS {
            violations.push(DqViolation {
                table: TableKind::Consumption,
                row_number: None,
                level: DqLevel::Warning,
                field: self.catalog.date_column.clone(),
                message: format!(
                    "消耗记录仅 {} 条，少于 {} 条，双周窗口将缩短",
                    table.len(),
                    TRAILING_RECORDS
                ),
            });
        }

        let mut seen_dates = HashSet::new();
        for record in &table.records {
            // WARNING: 日期重复（同一天多行，均参与窗口计数）
            if !seen_dates.insert(record.date) {
                violations.push(DqViolation {
                    table: TableKind::Consumption,
                    row_number: Some(record.row_number),
                    level: DqLevel::Warning,
                    field: self.catalog.date_column.clone(),
                    message: format!("日期重复: {}", record.date),
                });
            }

            // WARNING: 负消耗量
            for column in self.catalog.consumption_columns() {
                let qty = record.quantity(column);
                if qty < 0.0 {
                    violations.push(DqViolation {
                        table: TableKind::Consumption,
                        row_number: Some(record.row_number),
                        level: DqLevel::Warning,
                        field: column.to_string(),
                        message: format!("消耗量为负数: {}", qty),
                    });
                }
            }
        }

        violations
    }

    // ==========================================
    // 库存表校验
    // ==========================================

    pub fn validate_inventory(&self, table: &InventoryTable) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let item_column = &self.catalog.inventory_item_column;

        let mut seen_names = HashSet::new();
        for record in &table.records {
            // WARNING: 物品名重复（取第一行）
            if !seen_names.insert(record.item_name.as_str()) {
                violations.push(DqViolation {
                    table: TableKind::Inventory,
                    row_number: Some(record.row_number),
                    level: DqLevel::Warning,
                    field: item_column.clone(),
                    message: format!("物品名重复: {}，以第一行为准", record.item_name),
                });
            }

            // WARNING: 负库存
            let quantities = [
                (&self.catalog.on_hand_column, record.on_hand_quantity),
                (&self.catalog.in_transit_column, record.in_transit_quantity),
            ];
            for (column, value) in quantities {
                if let Some(v) = value.filter(|v| *v < 0.0) {
                    violations.push(DqViolation {
                        table: TableKind::Inventory,
                        row_number: Some(record.row_number),
                        level: DqLevel::Warning,
                        field: column.clone(),
                        message: format!("数量为负数: {}", v),
                    });
                }
            }
        }

        // INFO: 跟踪物品在库存表中无记录（库存按 0 计）
        for item in &self.catalog.items {
            if !seen_names.contains(item.inventory_key.as_str()) {
                violations.push(DqViolation {
                    table: TableKind::Inventory,
                    row_number: None,
                    level: DqLevel::Info,
                    field: item_column.clone(),
                    message: format!("库存表无 {} 记录，库存按 0 计", item.inventory_key),
                });
            }
        }

        violations
    }
}
