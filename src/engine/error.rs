// ==========================================
// B-chain 补货助手 - 引擎错误类型
// ==========================================
// 只有输入结构问题才报错；
// 零基期、库存缺失、记录不足均有定义的降级值
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("消耗表为空，无法计算补货建议")]
    EmptyConsumptionHistory,

    #[error("消耗表缺少物品 {item_id} 的消耗列: {column}")]
    MissingConsumptionColumn { item_id: String, column: String },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
