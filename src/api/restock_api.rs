// ==========================================
// B-chain 补货助手 - 补货建议 API
// ==========================================
// 职责: 组合导入器 + 补货引擎 + 趋势摘要
// 调用方: CLI / 任意展示层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::dq::DqReport;
use crate::domain::types::TableKind;
use crate::domain::{ConsumptionTable, InventoryTable, RestockReport};
use crate::engine::{ComparisonChart, RestockEngine, TrendNarrative, TrendSummaryEngine};
use crate::i18n::DEFAULT_LOCALE;
use crate::importer::{DqValidator, RestockImporter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;
use uuid::Uuid;

/// 一次完整运行的输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRun {
    /// 补货建议
    pub report: RestockReport,
    /// 趋势描述
    pub narratives: Vec<TrendNarrative>,
    /// 双周对比图数据
    pub chart: ComparisonChart,
    /// 消耗表 DQ 报告
    pub consumption_dq: DqReport,
    /// 库存表 DQ 报告
    pub inventory_dq: DqReport,
}

/// 补货建议API
pub struct RestockApi {
    config: AppConfig,
    locale: String,
}

impl RestockApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// 指定报告语言（"zh-CN" / "en"）
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 从两个文件计算补货建议
    ///
    /// # 参数
    /// - consumption_path: 消耗记录文件（.csv / .xlsx / .xls）
    /// - inventory_path: 库存文件
    ///
    /// # 返回
    /// - Err(ApiError): 文件错误、消耗表结构错误、配置错误
    #[instrument(skip_all)]
    pub fn run_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        consumption_path: P,
        inventory_path: Q,
    ) -> ApiResult<RestockRun> {
        let importer = RestockImporter::new(&self.config.catalog);

        let consumption = importer
            .import_consumption(consumption_path)
            .map_err(|e| ApiError::from_import(TableKind::Consumption, e))?;
        let inventory = importer
            .import_inventory(inventory_path)
            .map_err(|e| ApiError::from_import(TableKind::Inventory, e))?;

        self.assemble(
            &consumption.table,
            &inventory.table,
            consumption.dq_report,
            inventory.dq_report,
        )
    }

    /// 从内存表计算补货建议
    pub fn run_from_tables(
        &self,
        consumption: &ConsumptionTable,
        inventory: &InventoryTable,
    ) -> ApiResult<RestockRun> {
        let validator = DqValidator::new(&self.config.catalog);
        let consumption_dq = DqReport::new(
            Uuid::new_v4().to_string(),
            TableKind::Consumption,
            consumption.len(),
            validator.validate_consumption(consumption),
        );
        let inventory_dq = DqReport::new(
            Uuid::new_v4().to_string(),
            TableKind::Inventory,
            inventory.len(),
            validator.validate_inventory(inventory),
        );

        self.assemble(consumption, inventory, consumption_dq, inventory_dq)
    }

    /// 渲染 Markdown 文本报告
    pub fn render_markdown(&self, run: &RestockRun) -> String {
        TrendSummaryEngine::new().render_markdown(&run.report, &self.locale)
    }

    fn assemble(
        &self,
        consumption: &ConsumptionTable,
        inventory: &InventoryTable,
        consumption_dq: DqReport,
        inventory_dq: DqReport,
    ) -> ApiResult<RestockRun> {
        let report = RestockEngine::new().evaluate(
            consumption,
            inventory,
            &self.config.catalog,
            &self.config.params,
        )?;

        let summary = TrendSummaryEngine::new();
        let narratives = summary.summarize(&report);
        let chart = summary.comparison_chart(&report, &self.locale);

        Ok(RestockRun {
            report,
            narratives,
            chart,
            consumption_dq,
            inventory_dq,
        })
    }
}
