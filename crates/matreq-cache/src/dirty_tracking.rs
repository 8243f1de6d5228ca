//! 髒標記追蹤

use std::collections::HashSet;

/// 髒標記追蹤器（產品與物料分開記錄）
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty_products: HashSet<String>,
    dirty_materials: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記產品（配方）為髒
    pub fn mark_product_dirty(&mut self, product_id: String) {
        self.dirty_products.insert(product_id);
    }

    /// 標記物料為髒
    pub fn mark_material_dirty(&mut self, material_id: String) {
        self.dirty_materials.insert(material_id);
    }

    pub fn is_product_dirty(&self, product_id: &str) -> bool {
        self.dirty_products.contains(product_id)
    }

    pub fn is_material_dirty(&self, material_id: &str) -> bool {
        self.dirty_materials.contains(material_id)
    }

    /// 是否沒有任何髒標記
    pub fn is_empty(&self) -> bool {
        self.dirty_products.is_empty() && self.dirty_materials.is_empty()
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_products.clear();
        self.dirty_materials.clear();
    }
}
