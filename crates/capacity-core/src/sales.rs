//! 成品庫存與銷售速率快照模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 成品庫存（每個產品目前的在庫單位數）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStock {
    /// 產品ID
    pub product_id: String,

    /// 在庫單位數
    pub units_on_hand: Decimal,
}

impl ProductStock {
    /// 創建新的成品庫存記錄
    pub fn new(product_id: String, units_on_hand: Decimal) -> Self {
        Self {
            product_id,
            units_on_hand,
        }
    }
}

/// 銷售速率快照（外部銷售統計供應方的彙總輸出）
///
/// 引擎只消費此彙總；未出現在此饋送中的產品會被排名排除，
/// 「零銷量」與「無資料」是不同的事，不得混為一談。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesVelocitySnapshot {
    /// 產品ID
    pub product_id: String,

    /// 追蹤視窗內售出單位數
    pub units_sold: Decimal,
}

impl SalesVelocitySnapshot {
    /// 創建新的銷售速率快照
    pub fn new(product_id: String, units_sold: Decimal) -> Self {
        Self {
            product_id,
            units_sold,
        }
    }
}
