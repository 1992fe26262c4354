// ==========================================
// B-chain 补货助手 - 库存快照
// ==========================================
// 查找规则: 物品名精确匹配，多行同名取第一行
// 缺失/格式错误一律按 0 处理，不向上抛错
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// InventoryRecord - 单个物品库存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,                  // 耗材物品名
    pub on_hand_quantity: Option<f64>,      // 在仓数量（None = 缺失或无法解析）
    pub in_transit_quantity: Option<f64>,   // 在途数量
    #[serde(default)]
    pub row_number: usize,
}

impl InventoryRecord {
    pub fn new(item_name: impl Into<String>, on_hand: f64, in_transit: f64) -> Self {
        Self {
            item_name: item_name.into(),
            on_hand_quantity: Some(on_hand),
            in_transit_quantity: Some(in_transit),
            row_number: 0,
        }
    }

    /// 在仓 + 在途，缺失项按 0 计
    pub fn stock_total(&self) -> f64 {
        self.on_hand_quantity.unwrap_or(0.0) + self.in_transit_quantity.unwrap_or(0.0)
    }
}

// ==========================================
// InventoryTable - 库存表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryTable {
    pub records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    /// 按物品名查找库存合计
    ///
    /// # 返回
    /// - Some(total): 找到匹配行（取第一行）
    /// - None: 无匹配行
    pub fn find_stock_total(&self, item_name: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.item_name == item_name)
            .map(InventoryRecord::stock_total)
    }

    /// 按物品名查找库存合计，无匹配时为 0
    pub fn stock_total_or_zero(&self, item_name: &str) -> f64 {
        self.find_stock_total(item_name).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
