//! 配方（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方用料（每一生產批次的用量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 物料ID
    pub material_id: String,

    /// 物料名稱（冗餘副本）
    pub material_name: String,

    /// 每批次用量
    pub qty_per_batch: Decimal,

    /// 計量單位
    pub unit: String,
}

impl RecipeIngredient {
    /// 創建新的配方用料
    pub fn new(
        material_id: String,
        material_name: String,
        qty_per_batch: Decimal,
        unit: String,
    ) -> Self {
        Self {
            material_id,
            material_name,
            qty_per_batch,
            unit,
        }
    }
}

/// 配方：一個產品對應一份有序的用料清單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub product_name: String,

    /// 用料清單（保持定義順序）
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// 創建空配方
    pub fn new(product_id: String, product_name: String) -> Self {
        Self {
            product_id,
            product_name,
            ingredients: Vec::new(),
        }
    }

    /// 建構器模式：附加用料
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// 用料涉及的物料ID（依配方順序）
    pub fn material_ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.material_id.as_str())
    }

    /// 用料數量
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
