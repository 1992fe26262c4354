// ==========================================
// B-chain 补货助手 - 字段映射器实现
// ==========================================
// 职责: 原始表 → 消耗表 / 库存表
// 映射关系来自物品目录（ItemCatalog）
// ==========================================
// 消耗表: 日期列缺失或日期无法解析 → 报错
// 库存表: 永不报错，问题降级为 DQ 警告
// ==========================================

use crate::config::ItemCatalog;
use crate::domain::dq::DqViolation;
use crate::domain::types::{DqLevel, TableKind};
use crate::domain::{ConsumptionRecord, ConsumptionTable, InventoryRecord, InventoryTable};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{RawRow, RawTable};

pub struct FieldMapper<'a> {
    catalog: &'a ItemCatalog,
    cleaner: DataCleaner,
}

impl<'a> FieldMapper<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self {
            catalog,
            cleaner: DataCleaner,
        }
    }

    // ==========================================
    // 消耗表映射
    // ==========================================

    /// 将原始表映射为消耗表
    ///
    /// # 说明
    /// - 目录中的消耗列若在表中缺失，这里不报错，由引擎按物品报告
    /// - 空单元格记为缺失（求和时按 0 计）
    pub fn map_consumption(&self, raw: &RawTable) -> ImportResult<ConsumptionTable> {
        let date_column = self.catalog.date_column.as_str();
        if !raw.has_column(date_column) {
            return Err(ImportError::MissingColumn {
                table: TableKind::Consumption,
                column: date_column.to_string(),
            });
        }

        let item_columns: Vec<&str> = self
            .catalog
            .consumption_columns()
            .filter(|c| raw.has_column(c))
            .collect();

        let records = raw
            .rows
            .iter()
            .map(|row| self.map_consumption_row(row, date_column, &item_columns))
            .collect::<ImportResult<Vec<_>>>()?;

        Ok(ConsumptionTable::new(raw.headers.clone(), records))
    }

    fn map_consumption_row(
        &self,
        row: &RawRow,
        date_column: &str,
        item_columns: &[&str],
    ) -> ImportResult<ConsumptionRecord> {
        let date = self
            .cleaner
            .parse_date(row.get(date_column), row.row_number, date_column)?;

        let mut record = ConsumptionRecord::new(date);
        record.row_number = row.row_number;

        for column in item_columns {
            if let Some(qty) = self
                .cleaner
                .parse_quantity(row.get(column), row.row_number, column)?
            {
                record.quantities.insert((*column).to_string(), qty);
            }
        }

        Ok(record)
    }

    // ==========================================
    // 库存表映射
    // ==========================================

    /// 将原始表映射为库存表
    ///
    /// # 返回
    /// - InventoryTable: 可解析的库存行
    /// - Vec<DqViolation>: 映射过程中的降级记录
    pub fn map_inventory(&self, raw: &RawTable) -> (InventoryTable, Vec<DqViolation>) {
        let mut violations = Vec::new();

        let item_column = self.catalog.inventory_item_column.as_str();
        if !raw.has_column(item_column) {
            violations.push(table_warning(
                item_column,
                format!("库存表缺少物品列 {}，所有物品库存按 0 计", item_column),
            ));
            return (InventoryTable::default(), violations);
        }

        let quantity_columns = [
            self.catalog.on_hand_column.as_str(),
            self.catalog.in_transit_column.as_str(),
        ];
        for column in quantity_columns {
            if !raw.has_column(column) {
                violations.push(table_warning(
                    column,
                    format!("库存表缺少数量列 {}，所有物品库存按 0 计", column),
                ));
            }
        }
        // 任一数量列缺失则整表无效，不使用部分合计
        if quantity_columns.iter().any(|c| !raw.has_column(c)) {
            return (InventoryTable::default(), violations);
        }

        let mut records = Vec::with_capacity(raw.len());
        for row in &raw.rows {
            let item_name = match self.cleaner.normalize_null(row.get(item_column)) {
                Some(name) => name.to_string(),
                None => {
                    violations.push(DqViolation {
                        table: TableKind::Inventory,
                        row_number: Some(row.row_number),
                        level: DqLevel::Warning,
                        field: item_column.to_string(),
                        message: "物品名为空，整行忽略".to_string(),
                    });
                    continue;
                }
            };

            let on_hand = self.lenient_quantity(row, quantity_columns[0], &mut violations);
            let in_transit = self.lenient_quantity(row, quantity_columns[1], &mut violations);

            records.push(InventoryRecord {
                item_name,
                on_hand_quantity: on_hand,
                in_transit_quantity: in_transit,
                row_number: row.row_number,
            });
        }

        (InventoryTable::new(records), violations)
    }

    /// 宽松解析数量：无法解析时记 DQ 警告并返回 None
    fn lenient_quantity(
        &self,
        row: &RawRow,
        column: &str,
        violations: &mut Vec<DqViolation>,
    ) -> Option<f64> {
        match self.cleaner.parse_quantity(row.get(column), row.row_number, column) {
            Ok(value) => value,
            Err(err) => {
                violations.push(DqViolation {
                    table: TableKind::Inventory,
                    row_number: Some(row.row_number),
                    level: DqLevel::Warning,
                    field: column.to_string(),
                    message: format!("{}，按 0 计", err),
                });
                None
            }
        }
    }
}

fn table_warning(field: &str, message: String) -> DqViolation {
    DqViolation {
        table: TableKind::Inventory,
        row_number: None,
        level: DqLevel::Warning,
        field: field.to_string(),
        message,
    }
}
