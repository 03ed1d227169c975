//! 髒標記追蹤

use std::collections::HashSet;

/// 髒標記追蹤器
///
/// 記錄自上次報表以來庫存發生異動的物料ID。
pub struct DirtyTracker {
    dirty_materials: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self {
            dirty_materials: HashSet::new(),
        }
    }

    /// 標記物料為髒
    pub fn mark_dirty(&mut self, material_id: String) {
        self.dirty_materials.insert(material_id);
    }

    /// 檢查物料是否為髒
    pub fn is_dirty(&self, material_id: &str) -> bool {
        self.dirty_materials.contains(material_id)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_materials.clear();
    }

    /// 獲取所有髒物料（依ID排序）
    pub fn dirty_materials(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.dirty_materials.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}
