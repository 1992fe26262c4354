// ==========================================
// B-chain 补货助手 - 导入层
// ==========================================
// 职责: 外部表格导入，生成消耗表 / 库存表
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod restock_importer;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use dq_validator::DqValidator;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use importer_trait::{FileParser, RawRow, RawTable};
pub use restock_importer::{ImportOutcome, RestockImporter};
