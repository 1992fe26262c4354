// ==========================================
// B-chain 补货助手 - 补货参数
// ==========================================
// 日均天数 + 生产/运输/安全天数
// 覆盖周期 = 生产 + 运输 + 安全
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 日均天数下限（含）
pub const MIN_DAILY_AVG_DAYS: u32 = 1;
/// 日均天数上限（含）
pub const MAX_DAILY_AVG_DAYS: u32 = 30;
/// 生产/运输/安全天数各自的上限（含）
pub const MAX_STAGE_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestockParams {
    /// 计算日均消耗的除数天数（1~30）
    pub daily_avg_days: u32,
    /// 生产周期（天）
    pub production_days: u32,
    /// 运输周期（天）
    pub shipping_days: u32,
    /// 安全库存缓冲（天）
    pub safety_days: u32,
}

impl Default for RestockParams {
    fn default() -> Self {
        Self {
            daily_avg_days: 14,
            production_days: 8,
            shipping_days: 15,
            safety_days: 12,
        }
    }
}

impl RestockParams {
    /// 补货需覆盖的总天数（未校验的参数按饱和相加）
    pub fn total_lead_days(&self) -> u32 {
        self.production_days
            .saturating_add(self.shipping_days)
            .saturating_add(self.safety_days)
    }

    /// 校验参数范围
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_DAILY_AVG_DAYS..=MAX_DAILY_AVG_DAYS).contains(&self.daily_avg_days) {
            return Err(ConfigError::InvalidParam {
                field: "daily_avg_days".to_string(),
                message: format!(
                    "取值 {} 超出范围 [{}, {}]",
                    self.daily_avg_days, MIN_DAILY_AVG_DAYS, MAX_DAILY_AVG_DAYS
                ),
            });
        }

        for (field, value) in [
            ("production_days", self.production_days),
            ("shipping_days", self.shipping_days),
            ("safety_days", self.safety_days),
        ] {
            if value > MAX_STAGE_DAYS {
                return Err(ConfigError::InvalidParam {
                    field: field.to_string(),
                    message: format!("取值 {} 超出范围 [0, {}]", value, MAX_STAGE_DAYS),
                });
            }
        }
        Ok(())
    }
}
