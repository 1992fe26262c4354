// ==========================================
// B-chain 补货助手 - 双周窗口
// ==========================================
// 规则: 按日期升序（稳定排序），取最后 28 条记录
//       前 14 条为 week1，其余为 week2
// 记录不足 28 条时不补齐、不拒绝：两个窗口按实际记录缩短
// ==========================================

use crate::domain::types::WindowCoverage;
use crate::domain::{ConsumptionRecord, RestockWindow};

/// 单个窗口的记录数
pub const WINDOW_DAYS: usize = 14;
/// 参与计算的尾部记录数
pub const TRAILING_RECORDS: usize = WINDOW_DAYS * 2;

// ==========================================
// ConsumptionWindow - 已切分的双周窗口
// ==========================================
#[derive(Debug, Clone)]
pub struct ConsumptionWindow<'a> {
    pub week1: Vec<&'a ConsumptionRecord>,
    pub week2: Vec<&'a ConsumptionRecord>,
}

impl<'a> ConsumptionWindow<'a> {
    /// 切分窗口
    ///
    /// # 返回
    /// - None: 无记录
    pub fn split(records: &'a [ConsumptionRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut sorted: Vec<&ConsumptionRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.date);

        let skip = sorted.len().saturating_sub(TRAILING_RECORDS);
        let mut week1 = sorted.split_off(skip);
        let split_at = week1.len().min(WINDOW_DAYS);
        let week2 = week1.split_off(split_at);

        Some(Self { week1, week2 })
    }

    pub fn week1_total(&self, column: &str) -> f64 {
        self.week1.iter().map(|r| r.quantity(column)).sum()
    }

    pub fn week2_total(&self, column: &str) -> f64 {
        self.week2.iter().map(|r| r.quantity(column)).sum()
    }

    pub fn len(&self) -> usize {
        self.week1.len() + self.week2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn coverage(&self) -> WindowCoverage {
        if self.len() < TRAILING_RECORDS {
            WindowCoverage::Partial
        } else {
            WindowCoverage::Full
        }
    }

    /// 窗口元信息（首日 / week2 首日 / 末日）
    pub fn describe(&self) -> RestockWindow {
        // split() 保证 week1 非空
        let start = self.week1[0].date;
        let end = self
            .week2
            .last()
            .or_else(|| self.week1.last())
            .map(|r| r.date)
            .unwrap_or(start);
        let split = self.week2.first().map(|r| r.date).unwrap_or(end);

        RestockWindow {
            start,
            split,
            end,
            week1_days: self.week1.len(),
            week2_days: self.week2.len(),
            coverage: self.coverage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn records(days: usize) -> Vec<ConsumptionRecord> {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..days)
            .map(|i| {
                ConsumptionRecord::new(base + Duration::days(i as i64))
                    .with_quantity("kit", (i + 1) as f64)
            })
            .collect()
    }

    #[test]
    fn test_split_takes_trailing_28() {
        let mut data = records(40);
        data.reverse(); // 输入乱序

        let window = ConsumptionWindow::split(&data).unwrap();

        assert_eq!(window.week1.len(), 14);
        assert_eq!(window.week2.len(), 14);
        // 第 13..=26 天（值 13..=26）为 week1，27..=40 为 week2
        assert_eq!(window.week1_total("kit"), (13..=26).sum::<usize>() as f64);
        assert_eq!(window.week2_total("kit"), (27..=40).sum::<usize>() as f64);
        assert_eq!(window.coverage(), WindowCoverage::Full);
    }

    #[test]
    fn test_split_short_history() {
        let data = records(20);
        let window = ConsumptionWindow::split(&data).unwrap();

        assert_eq!(window.week1.len(), 14);
        assert_eq!(window.week2.len(), 6);
        assert_eq!(window.coverage(), WindowCoverage::Partial);

        let meta = window.describe();
        assert_eq!(meta.week2_days, 6);
        assert_eq!(meta.split, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_split_fewer_than_one_window() {
        let data = records(5);
        let window = ConsumptionWindow::split(&data).unwrap();

        assert_eq!(window.week1.len(), 5);
        assert!(window.week2.is_empty());
        assert_eq!(window.week2_total("kit"), 0.0);

        let meta = window.describe();
        assert_eq!(meta.split, meta.end);
        assert_eq!(meta.end, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_split_empty() {
        assert!(ConsumptionWindow::split(&[]).is_none());
    }
}
