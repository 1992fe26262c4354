// ==========================================
// B-chain 补货助手 - 耗材物品目录
// ==========================================
// 物品 → 消耗列名 / 库存物品名 的映射
// 目录是配置，不是逻辑：换物品无需改代码
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// TrackedItem - 被跟踪的耗材
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedItem {
    /// 物品 ID（结果表中的 Item 列）
    pub item_id: String,
    /// 展示名（图表标签）
    pub display_name: String,
    /// 消耗表中的列名
    pub consumption_column: String,
    /// 库存表中的物品名
    pub inventory_key: String,
}

impl TrackedItem {
    pub fn new(
        item_id: impl Into<String>,
        display_name: impl Into<String>,
        consumption_column: impl Into<String>,
        inventory_key: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            display_name: display_name.into(),
            consumption_column: consumption_column.into(),
            inventory_key: inventory_key.into(),
        }
    }
}

// ==========================================
// ItemCatalog - 物品目录 + 表头配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCatalog {
    /// 消耗表日期列
    pub date_column: String,
    /// 库存表物品名列
    pub inventory_item_column: String,
    /// 库存表在仓数量列
    pub on_hand_column: String,
    /// 库存表在途数量列
    pub in_transit_column: String,
    /// 跟踪物品（顺序即输出顺序）
    pub items: Vec<TrackedItem>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self {
            date_column: "日期".to_string(),
            inventory_item_column: "耗材物品".to_string(),
            on_hand_column: "在仓数量".to_string(),
            in_transit_column: "在途数量".to_string(),
            items: vec![
                TrackedItem::new("五件套", "Tool Kit", "五件套消耗", "五件套"),
                TrackedItem::new("感谢卡", "Thank You Card", "感谢卡消耗", "感谢卡"),
                TrackedItem::new("飞机袋", "Bubble Mailing", "飞机袋消耗", "飞机袋"),
                TrackedItem::new("达人信", "Influencer Note", "达人信消耗", "达人信"),
                TrackedItem::new("引流卡", "Promo Card", "引流卡消耗", "引流卡"),
            ],
        }
    }
}

impl ItemCatalog {
    /// 以默认表头构造自定义物品目录
    pub fn with_items(items: Vec<TrackedItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&TrackedItem> {
        self.items.iter().find(|i| i.item_id == item_id)
    }

    /// 所有消耗列名（按目录顺序）
    pub fn consumption_columns(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.consumption_column.as_str())
    }

    /// 校验目录
    ///
    /// # 规则
    /// - 至少一个物品
    /// - 表头列名与物品字段均非空
    /// - item_id、consumption_column 各自唯一
    pub fn validate(&self) -> ConfigResult<()> {
        if self.items.is_empty() {
            return Err(ConfigError::InvalidCatalog("物品目录为空".to_string()));
        }

        let headers = [
            ("date_column", &self.date_column),
            ("inventory_item_column", &self.inventory_item_column),
            ("on_hand_column", &self.on_hand_column),
            ("in_transit_column", &self.in_transit_column),
        ];
        for (name, value) in headers {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidCatalog(format!("{} 为空", name)));
            }
        }

        let mut ids = HashSet::new();
        let mut columns = HashSet::new();
        for item in &self.items {
            if item.item_id.trim().is_empty()
                || item.consumption_column.trim().is_empty()
                || item.inventory_key.trim().is_empty()
            {
                return Err(ConfigError::InvalidCatalog(format!(
                    "物品字段为空: {:?}",
                    item
                )));
            }
            if !ids.insert(item.item_id.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "重复物品 ID: {}",
                    item.item_id
                )));
            }
            if !columns.insert(item.consumption_column.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "重复消耗列: {}",
                    item.consumption_column
                )));
            }
        }

        Ok(())
    }
}
