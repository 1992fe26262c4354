// ==========================================
// B-chain 补货助手 - API层错误类型
// ==========================================
// 职责: 将导入/引擎/配置错误转换为用户可操作的错误消息
// 错误信息必须指明是哪张表，便于用户修正后重新上传
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::TableKind;
use crate::engine::EngineError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 文件级错误（不存在、格式不支持、无法解析）
    #[error("{table}文件导入失败: {message}")]
    ImportError { table: TableKind, message: String },

    /// 数据结构错误（必需列缺失、日期无法解析、无记录）
    #[error("{table}数据无效: {message}")]
    InvalidInput { table: TableKind, message: String },

    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// 按来源表转换导入错误
    pub fn from_import(table: TableKind, err: ImportError) -> Self {
        match err {
            ImportError::MissingColumn { .. }
            | ImportError::TypeConversionError { .. }
            | ImportError::DateFormatError { .. } => ApiError::InvalidInput {
                table,
                message: err.to_string(),
            },
            ImportError::FileNotFound(_)
            | ImportError::UnsupportedFormat(_)
            | ImportError::FileReadError(_)
            | ImportError::ExcelParseError(_)
            | ImportError::CsvParseError(_) => ApiError::ImportError {
                table,
                message: err.to_string(),
            },
        }
    }
}

// ==========================================
// 从 EngineError 转换
// 引擎只会因消耗表结构或配置报错
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidConfig(inner) => ApiError::from(inner),
            EngineError::EmptyConsumptionHistory | EngineError::MissingConsumptionColumn { .. } => {
                ApiError::InvalidInput {
                    table: TableKind::Consumption,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
