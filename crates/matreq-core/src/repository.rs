//! 唯讀查詢介面
//!
//! 需求計算只透過這兩個介面讀取配方與物料資料，查無資料以 `None` 表示。

use crate::{Material, Recipe};

/// 配方查詢
pub trait RecipeRepository {
    /// 依產品ID取得配方
    fn get_recipe_by_product_id(&self, product_id: &str) -> Option<&Recipe>;
}

/// 物料查詢
pub trait MaterialRepository {
    /// 依物料ID取得物料
    fn get_material_by_id(&self, material_id: &str) -> Option<&Material>;
}

impl<T: RecipeRepository + ?Sized> RecipeRepository for &T {
    fn get_recipe_by_product_id(&self, product_id: &str) -> Option<&Recipe> {
        (**self).get_recipe_by_product_id(product_id)
    }
}

impl<T: MaterialRepository + ?Sized> MaterialRepository for &T {
    fn get_material_by_id(&self, material_id: &str) -> Option<&Material> {
        (**self).get_material_by_id(material_id)
    }
}

impl RecipeRepository for std::collections::HashMap<String, Recipe> {
    fn get_recipe_by_product_id(&self, product_id: &str) -> Option<&Recipe> {
        self.get(product_id)
    }
}

impl MaterialRepository for std::collections::HashMap<String, Material> {
    fn get_material_by_id(&self, material_id: &str) -> Option<&Material> {
        self.get(material_id)
    }
}
