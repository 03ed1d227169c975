//! 原物料與庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料類型
///
/// 宣告順序即瓶頸判定的優先序（derive `Ord`）：當多種資源可產出的
/// 單位數相同時，取序位較前者作為限制因素，原料耗盡先於包材耗盡回報。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// 皂基
    RawSoap,
    /// 澆鑄材料（模具以此類型入帳，每單位占用一個槽位）
    CastMaterial,
    /// 香精油
    FragranceOil,
    /// 添加物
    Additive,
    /// 包材
    Packaging,
}

/// 計量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// 公克
    Grams,
    /// 毫升
    Milliliters,
    /// 滴
    Drops,
    /// 件
    Pieces,
}

/// 原物料庫存記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialStock {
    /// 物料ID
    pub id: String,

    /// 物料類型
    pub material_type: MaterialType,

    /// 物料名稱
    pub name: String,

    /// 計量單位
    pub unit: Unit,

    /// 現有數量
    pub quantity_available: Decimal,

    /// 低庫存門檻（與產能計算正交的補貨關注點）
    pub minimum_threshold: Decimal,
}

impl RawMaterialStock {
    /// 創建新的庫存記錄
    pub fn new(
        id: String,
        material_type: MaterialType,
        name: String,
        unit: Unit,
        quantity_available: Decimal,
    ) -> Self {
        Self {
            id,
            material_type,
            name,
            unit,
            quantity_available,
            minimum_threshold: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置低庫存門檻
    pub fn with_minimum_threshold(mut self, threshold: Decimal) -> Self {
        self.minimum_threshold = threshold;
        self
    }

    /// 可用於產能換算的數量
    ///
    /// 上游建模錯誤可能出現負庫存，這裡鉗制為 0，不得以負產能傳播。
    pub fn usable_quantity(&self) -> Decimal {
        if self.quantity_available < Decimal::ZERO {
            Decimal::ZERO
        } else {
            self.quantity_available
        }
    }

    /// 檢查是否低於低庫存門檻
    pub fn is_below_minimum(&self) -> bool {
        self.quantity_available < self.minimum_threshold
    }

    /// 獲取需要補充的數量
    pub fn shortfall(&self) -> Decimal {
        if self.is_below_minimum() {
            self.minimum_threshold - self.quantity_available
        } else {
            Decimal::ZERO
        }
    }
}
