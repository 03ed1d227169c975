//! 物料 → 產品反向索引

use std::collections::{BTreeSet, HashMap};

use capacity_core::Recipe;

use crate::dirty_tracking::DirtyTracker;

/// 配方反向索引
///
/// 由配方列表建立「物料ID → 引用它的產品ID集合」，
/// 供呼叫端在庫存異動後只重算受影響的產品。
pub struct RecipeIndex {
    products_by_material: HashMap<String, BTreeSet<String>>,
}

impl RecipeIndex {
    /// 從配方列表建立索引
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut products_by_material: HashMap<String, BTreeSet<String>> = HashMap::new();

        for recipe in recipes {
            for requirement in recipe.unit_requirements() {
                products_by_material
                    .entry(requirement.material_id)
                    .or_default()
                    .insert(recipe.product_id.clone());
            }
        }

        Self {
            products_by_material,
        }
    }

    /// 引用該物料的產品ID（依ID排序）
    pub fn products_using(&self, material_id: &str) -> Vec<&str> {
        self.products_by_material
            .get(material_id)
            .map(|products| products.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// 髒物料波及的產品ID（排序、去重）
    pub fn affected_products(&self, tracker: &DirtyTracker) -> Vec<String> {
        let mut affected: BTreeSet<&str> = BTreeSet::new();

        for material_id in tracker.dirty_materials() {
            if let Some(products) = self.products_by_material.get(&material_id) {
                affected.extend(products.iter().map(String::as_str));
            }
        }

        affected.into_iter().map(str::to_string).collect()
    }
}
