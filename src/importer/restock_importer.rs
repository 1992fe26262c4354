// ==========================================
// B-chain 补货助手 - 表格导入器
// ==========================================
// 导入流程:
// 1. 文件读取与解析（CSV / Excel）
// 2. 字段映射与类型转换
// 3. 数据质量校验 + DQ 报告
// ==========================================

use crate::config::ItemCatalog;
use crate::domain::dq::DqReport;
use crate::domain::types::{DqLevel, TableKind};
use crate::domain::{ConsumptionTable, InventoryTable};
use crate::importer::dq_validator::DqValidator;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawTable;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ImportOutcome - 单表导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportOutcome<T> {
    pub batch_id: String,
    pub table: T,
    pub dq_report: DqReport,
    pub elapsed_time: Duration,
}

// ==========================================
// RestockImporter
// ==========================================
pub struct RestockImporter<'a> {
    catalog: &'a ItemCatalog,
    parser: UniversalFileParser,
}

impl<'a> RestockImporter<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self {
            catalog,
            parser: UniversalFileParser,
        }
    }

    /// 从文件导入消耗表
    ///
    /// # 返回
    /// - Err: 文件错误、日期列缺失、日期/数量无法解析
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_consumption<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportOutcome<ConsumptionTable>> {
        let raw = self.parser.parse(file_path)?;
        self.import_consumption_raw(&raw)
    }

    /// 从已解析的原始表导入消耗表
    pub fn import_consumption_raw(&self, raw: &RawTable) -> ImportResult<ImportOutcome<ConsumptionTable>> {
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let table = FieldMapper::new(self.catalog).map_consumption(raw)?;
        let violations = DqValidator::new(self.catalog).validate_consumption(&table);
        let dq_report = DqReport::new(batch_id.clone(), TableKind::Consumption, table.len(), violations);

        log_dq(&dq_report);
        info!(
            batch_id = %batch_id,
            rows = table.len(),
            warnings = dq_report.summary.warning,
            "消耗表导入完成"
        );

        Ok(ImportOutcome {
            batch_id,
            table,
            dq_report,
            elapsed_time: started.elapsed(),
        })
    }

    /// 从文件导入库存表
    ///
    /// # 返回
    /// - Err: 仅文件级错误（不存在、格式不支持、无法解析）
    /// - 列缺失/数值错误降级为 DQ 警告
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_inventory<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportOutcome<InventoryTable>> {
        let raw = self.parser.parse(file_path)?;
        Ok(self.import_inventory_raw(&raw))
    }

    /// 从已解析的原始表导入库存表（不会失败）
    pub fn import_inventory_raw(&self, raw: &RawTable) -> ImportOutcome<InventoryTable> {
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let (table, mut violations) = FieldMapper::new(self.catalog).map_inventory(raw);
        violations.extend(DqValidator::new(self.catalog).validate_inventory(&table));
        let dq_report = DqReport::new(batch_id.clone(), TableKind::Inventory, raw.len(), violations);

        log_dq(&dq_report);
        info!(
            batch_id = %batch_id,
            rows = table.len(),
            warnings = dq_report.summary.warning,
            "库存表导入完成"
        );

        ImportOutcome {
            batch_id,
            table,
            dq_report,
            elapsed_time: started.elapsed(),
        }
    }
}

fn log_dq(report: &DqReport) {
    for v in &report.violations {
        match v.level {
            DqLevel::Info => debug!(table = %v.table, field = %v.field, "{}", v.message),
            _ => warn!(
                table = %v.table,
                row = ?v.row_number,
                level = %v.level,
                field = %v.field,
                "{}",
                v.message
            ),
        }
    }
}
