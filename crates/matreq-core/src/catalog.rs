//! 記憶體內目錄（物料與配方）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    Material, MaterialRepository, MatreqError, Recipe, RecipeRepository, Result,
};

/// 物料與配方的記憶體內目錄
///
/// 同時實作 [`RecipeRepository`] 與 [`MaterialRepository`]，
/// 可直接以引用交給需求計算器。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    materials: HashMap<String, Material>,
    recipes: HashMap<String, Recipe>,
}

/// JSON 快照格式
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogSnapshot {
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 快照載入
    ///
    /// 每筆資料都經過與 `add_material` / `add_recipe` 相同的檢查。
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for material in snapshot.materials {
            catalog.add_material(material)?;
        }
        for recipe in snapshot.recipes {
            catalog.add_recipe(recipe)?;
        }
        Ok(catalog)
    }

    /// 輸出 JSON 快照（依ID排序）
    pub fn to_json_string(&self) -> Result<String> {
        let snapshot = CatalogSnapshot {
            materials: self.materials().into_iter().cloned().collect(),
            recipes: self.recipes().into_iter().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// 新增物料
    pub fn add_material(&mut self, material: Material) -> Result<()> {
        if self.materials.contains_key(&material.id) {
            return Err(MatreqError::DuplicateMaterial(material.id));
        }
        Self::check_stock(&material.id, material.stock)?;
        self.materials.insert(material.id.clone(), material);
        Ok(())
    }

    /// 新增或覆蓋物料，回傳被覆蓋的舊資料
    pub fn upsert_material(&mut self, material: Material) -> Result<Option<Material>> {
        Self::check_stock(&material.id, material.stock)?;
        Ok(self.materials.insert(material.id.clone(), material))
    }

    /// 刪除物料
    ///
    /// 引用此物料的配方保持不變，計算時該用料視為零庫存。
    pub fn remove_material(&mut self, material_id: &str) -> Option<Material> {
        self.materials.remove(material_id)
    }

    /// 設置庫存
    pub fn set_stock(&mut self, material_id: &str, stock: Decimal) -> Result<()> {
        Self::check_stock(material_id, stock)?;
        let material = self
            .materials
            .get_mut(material_id)
            .ok_or_else(|| MatreqError::MaterialNotFound(material_id.to_string()))?;
        material.stock = stock;
        Ok(())
    }

    /// 新增配方（每個產品只有一份配方）
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.recipes.contains_key(&recipe.product_id) {
            return Err(MatreqError::DuplicateRecipe(recipe.product_id));
        }
        if let Some(bad) = recipe
            .ingredients
            .iter()
            .find(|i| i.qty_per_batch < Decimal::ZERO)
        {
            return Err(MatreqError::NegativeIngredientQuantity {
                product_id: recipe.product_id.clone(),
                material_id: bad.material_id.clone(),
            });
        }
        self.recipes.insert(recipe.product_id.clone(), recipe);
        Ok(())
    }

    /// 刪除配方
    pub fn remove_recipe(&mut self, product_id: &str) -> Option<Recipe> {
        self.recipes.remove(product_id)
    }

    /// 所有物料（依ID排序）
    pub fn materials(&self) -> Vec<&Material> {
        let mut materials: Vec<_> = self.materials.values().collect();
        materials.sort_by(|a, b| a.id.cmp(&b.id));
        materials
    }

    /// 所有配方（依產品ID排序）
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<_> = self.recipes.values().collect();
        recipes.sort_by(|a, b| a.product_id.cmp(&b.product_id));
        recipes
    }

    /// 低於最低庫存的物料（依ID排序）
    pub fn low_stock_materials(&self) -> Vec<&Material> {
        self.materials()
            .into_iter()
            .filter(|m| m.is_below_minimum())
            .collect()
    }

    fn check_stock(material_id: &str, stock: Decimal) -> Result<()> {
        if stock < Decimal::ZERO {
            return Err(MatreqError::NegativeStock {
                material_id: material_id.to_string(),
                quantity: stock,
            });
        }
        Ok(())
    }
}

impl RecipeRepository for Catalog {
    fn get_recipe_by_product_id(&self, product_id: &str) -> Option<&Recipe> {
        self.recipes.get(product_id)
    }
}

impl MaterialRepository for Catalog {
    fn get_material_by_id(&self, material_id: &str) -> Option<&Material> {
        self.materials.get(material_id)
    }
}
