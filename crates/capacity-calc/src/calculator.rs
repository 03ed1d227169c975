//! 單一產品產能計算器

use std::collections::BTreeMap;

use capacity_core::{MaterialType, ProductCategory, Recipe, ResourceLedger};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一產品的產能計算結果
///
/// 每次報表執行重新產生，回傳後不可變，不落庫。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityResult {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub product_name: String,

    /// 產品類別
    pub category: ProductCategory,

    /// 自目前庫存可產出的最大單位數
    pub max_units: u64,

    /// 限制因素（僅在配方無任何有限約束時為 None，包材必有故不應發生）
    pub limiting_factor: Option<MaterialType>,

    /// 各物料類型可產出的單位數（BTreeMap 依優先序迭代，序列化穩定）
    pub per_resource_max_units: BTreeMap<MaterialType, u64>,

    /// 資料品質問題（缺失引用、重量拆分不符等）
    pub problems: Vec<String>,
}

/// 產能計算器
///
/// 無狀態的純函數：一個配方、一份帳本快照，不做 I/O、不阻塞。
/// 每個產品假定可獨占全部現有庫存，回答「現在最多能做多少個 X」，
/// 而非多產品同時生產的聯合配置問題（後者明確不在範圍內）。
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 計算單一產品自目前庫存可產出的最大單位數
    ///
    /// 逐資源獨立換算為可產單位數後取最小值。資料品質缺口
    /// （缺失的物料引用）記入 `problems` 並以 0 單位約束計入，
    /// 使產品正確回報為不可生產而非靜默高估；永不拋出。
    pub fn compute(recipe: &Recipe, ledger: &ResourceLedger) -> CapacityResult {
        let mut problems = recipe.validation_problems();
        let mut per_type: BTreeMap<MaterialType, u64> = BTreeMap::new();

        for requirement in recipe.unit_requirements() {
            let kind = requirement.role.material_type();

            let units = match ledger.usable_quantity(&requirement.material_id) {
                None => {
                    problems.push(format!(
                        "missing {} reference: {}",
                        requirement.role.label(),
                        requirement.material_id
                    ));
                    0
                }
                Some(available) => {
                    if requirement.per_unit_amount <= Decimal::ZERO {
                        // 零劑量不構成無限瓶頸，記錄問題後跳過該資源
                        problems.push(format!(
                            "non-positive per-unit amount for {} {}",
                            requirement.role.label(),
                            requirement.material_id
                        ));
                        continue;
                    }
                    Self::whole_units(available, requirement.per_unit_amount)
                }
            };

            // 同類型取最小值：兩個皂基是共同必需成分，不是可調配的共用池
            per_type
                .entry(kind)
                .and_modify(|current| *current = (*current).min(units))
                .or_insert(units);
        }

        let max_units = per_type.values().copied().min().unwrap_or(0);

        // BTreeMap 依物料類型優先序迭代，首個達到最小值者即為限制因素，
        // 平手時的選擇因而是確定性的（原料先於包材回報）
        let limiting_factor = per_type
            .iter()
            .find(|(_, &units)| units == max_units)
            .map(|(&kind, _)| kind);

        CapacityResult {
            product_id: recipe.product_id.clone(),
            product_name: recipe.name.clone(),
            category: recipe.category,
            max_units,
            limiting_factor,
            per_resource_max_units: per_type,
            problems,
        }
    }

    /// 整數單位換算：部分單位不可生產，一律向下取整
    fn whole_units(available: Decimal, per_unit: Decimal) -> u64 {
        (available / per_unit).floor().to_u64().unwrap_or(u64::MAX)
    }
}
