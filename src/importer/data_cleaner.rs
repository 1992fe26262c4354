// ==========================================
// B-chain 补货助手 - 数据清洗器实现
// ==========================================
// 职责: NULL 标准化 / 数值解析 / 日期解析
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 视为空值的文本（大小写不敏感）
const NULL_TOKENS: &[&str] = &["nan", "na", "n/a", "#n/a", "null", "none", "<na>"];

/// 纯日期格式
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y.%m.%d"];

/// 日期时间格式（时间部分丢弃）
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

/// Excel 序列日期的合法区间（1900-01-01 ~ 9999-12-31）
const EXCEL_SERIAL_MIN: f64 = 1.0;
const EXCEL_SERIAL_MAX: f64 = 2_958_465.0;

pub struct DataCleaner;

impl DataCleaner {
    /// 标准化 NULL 值（空字符串/空白/NaN 记号 → None）
    pub fn normalize_null<'a>(&self, value: Option<&'a str>) -> Option<&'a str> {
        value.map(str::trim).filter(|v| {
            !v.is_empty() && !NULL_TOKENS.iter().any(|t| v.eq_ignore_ascii_case(t))
        })
    }

    /// 解析数量
    ///
    /// # 返回
    /// - Ok(None): 空值
    /// - Ok(Some(f64)): 解析成功（千分位逗号已去除）
    /// - Err: 非数值或非有限数
    pub fn parse_quantity(
        &self,
        value: Option<&str>,
        row: usize,
        field: &str,
    ) -> ImportResult<Option<f64>> {
        let raw = match self.normalize_null(value) {
            None => return Ok(None),
            Some(v) => v,
        };

        let compact = raw.replace(',', "");
        match compact.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// 解析日期
    ///
    /// 依次尝试: 纯日期格式 → 日期时间格式 → Excel 序列日期
    pub fn parse_date(&self, value: Option<&str>, row: usize, field: &str) -> ImportResult<NaiveDate> {
        let format_error = || ImportError::DateFormatError {
            row,
            field: field.to_string(),
            value: value.unwrap_or("").to_string(),
        };

        let raw = self.normalize_null(value).ok_or_else(format_error)?;

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        {
            return Ok(date);
        }

        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Ok(dt.date());
        }

        self.excel_serial_to_date(raw).ok_or_else(format_error)
    }

    /// Excel 序列日期 → NaiveDate（以 1899-12-30 为第 0 天）
    fn excel_serial_to_date(&self, raw: &str) -> Option<NaiveDate> {
        let serial = raw.parse::<f64>().ok()?;
        if !(EXCEL_SERIAL_MIN..=EXCEL_SERIAL_MAX).contains(&serial) {
            return None;
        }
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
        epoch.checked_add_signed(Duration::days(serial.floor() as i64))
    }
}
