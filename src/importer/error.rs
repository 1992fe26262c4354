// ==========================================
// B-chain 补货助手 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 错误信息需包含表/列/行，便于用户修正后重新上传
// ==========================================

use crate::domain::types::TableKind;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("{table}缺少必需列: {column}")]
    MissingColumn { table: TableKind, column: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析为数值: {value}")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    #[error("日期格式错误 (行 {row}, 字段 {field}): 无法解析 {value:?}")]
    DateFormatError {
        row: usize,
        field: String,
        value: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
