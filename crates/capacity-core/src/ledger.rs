//! 資源帳本（唯讀庫存視圖）

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material::RawMaterialStock;

/// 資源帳本
///
/// 以物料ID為鍵的目前庫存快照。引擎在單次報表期間視其為不可變輸入，
/// 只讀不寫；呼叫端若需要一致的時點視圖，應在呼叫前先行快照。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLedger {
    materials: HashMap<String, RawMaterialStock>,
}

impl ResourceLedger {
    /// 創建空帳本
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// 從庫存記錄列表建立帳本（重複ID以後者為準）
    pub fn from_stocks(stocks: Vec<RawMaterialStock>) -> Self {
        let materials = stocks
            .into_iter()
            .map(|stock| (stock.id.clone(), stock))
            .collect();
        Self { materials }
    }

    /// 查詢物料庫存記錄
    pub fn get(&self, material_id: &str) -> Option<&RawMaterialStock> {
        self.materials.get(material_id)
    }

    /// 查詢可用於換算的數量（負庫存鉗制為 0）
    pub fn usable_quantity(&self, material_id: &str) -> Option<Decimal> {
        self.materials.get(material_id).map(|m| m.usable_quantity())
    }

    /// 檢查帳本是否含有該物料
    pub fn contains(&self, material_id: &str) -> bool {
        self.materials.contains_key(material_id)
    }

    /// 物料筆數
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// 帳本是否為空
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// 低於低庫存門檻的物料（依ID排序，避免洩漏雜湊迭代順序）
    pub fn low_stock(&self) -> Vec<&RawMaterialStock> {
        let mut low: Vec<&RawMaterialStock> = self
            .materials
            .values()
            .filter(|m| m.is_below_minimum())
            .collect();
        low.sort_by(|a, b| a.id.cmp(&b.id));
        low
    }
}
