//! 物料需求計算器

use matreq_core::{
    CalculatorConfig, MaterialRepository, MaterialRequirement, Recipe, RecipeRepository,
};
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::{RequirementReport, RequirementWarning};

/// 物料需求計算器
///
/// 純函數：不持有可變狀態，相同輸入與相同參考資料必得相同結果。
pub struct RequirementCalculator<R, M> {
    /// 配方查詢
    recipes: R,

    /// 物料查詢
    materials: M,

    /// 計算配置
    config: CalculatorConfig,
}

impl<R, M> RequirementCalculator<R, M>
where
    R: RecipeRepository,
    M: MaterialRepository,
{
    /// 創建新的需求計算器（預設配置）
    pub fn new(recipes: R, materials: M) -> Self {
        Self {
            recipes,
            materials,
            config: CalculatorConfig::default(),
        }
    }

    /// 建構器模式：設置計算配置
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// 主計算入口
    ///
    /// 產品未指定、批次數 ≤ 0 或查無配方時回傳空結果（`can_proceed = false`），
    /// 不回傳錯誤。
    pub fn compute_requirements(
        &self,
        product_id: Option<&str>,
        quantity: Decimal,
    ) -> RequirementReport {
        self.compute_with_projection(product_id, quantity, None)
    }

    /// 批量計算多筆互不相關的需求（並行），結果順序與輸入一致
    pub fn compute_many(&self, requests: &[(Option<&str>, Decimal)]) -> Vec<RequirementReport>
    where
        R: Sync,
        M: Sync,
    {
        tracing::debug!("批量計算物料需求：{} 筆", requests.len());

        requests
            .par_iter()
            .map(|(product_id, quantity)| self.compute_requirements(*product_id, *quantity))
            .collect()
    }

    /// 計算需求；`projected` 中的數量優先於物料現有庫存
    pub(crate) fn compute_with_projection(
        &self,
        product_id: Option<&str>,
        quantity: Decimal,
        projected: Option<&HashMap<String, Decimal>>,
    ) -> RequirementReport {
        let Some(product_id) = product_id else {
            tracing::debug!("未指定產品，回傳空結果");
            return RequirementReport::empty();
        };

        if quantity <= Decimal::ZERO {
            tracing::debug!("產品 {} 批次數 {} 無效，回傳空結果", product_id, quantity);
            return RequirementReport::empty();
        }

        let Some(recipe) = self.recipes.get_recipe_by_product_id(product_id) else {
            tracing::debug!("產品 {} 沒有配方，回傳空結果", product_id);
            return RequirementReport::empty();
        };

        let report = self.evaluate_recipe(recipe, quantity, projected);

        tracing::info!(
            "物料需求計算完成：產品 {}，批次 {}，用料 {} 項，缺料 {} 項",
            product_id,
            quantity,
            report.material_requirements.len(),
            report.shortages().count()
        );

        report
    }

    /// 逐項計算配方用料（保持配方順序）
    fn evaluate_recipe(
        &self,
        recipe: &Recipe,
        quantity: Decimal,
        projected: Option<&HashMap<String, Decimal>>,
    ) -> RequirementReport {
        let mut requirements = Vec::with_capacity(recipe.ingredients.len());
        let mut warnings = Vec::new();

        if recipe.is_empty() && self.config.record_warnings {
            warnings.push(RequirementWarning::info(
                recipe.product_id.clone(),
                "配方沒有任何用料".to_string(),
            ));
        }

        for ingredient in &recipe.ingredients {
            let available = match self.available_qty(&ingredient.material_id, projected) {
                Some(qty) => qty,
                None => {
                    // 查無物料視為零庫存
                    tracing::warn!(
                        "產品 {} 引用的物料 {} 不存在，視為零庫存",
                        recipe.product_id,
                        ingredient.material_id
                    );
                    if self.config.record_warnings {
                        warnings.push(RequirementWarning::warning(
                            ingredient.material_id.clone(),
                            format!("物料不存在，視為零庫存（產品 {}）", recipe.product_id),
                        ));
                    }
                    Decimal::ZERO
                }
            };

            let required = Self::scaled_requirement(ingredient.qty_per_batch, quantity);

            let requirement = MaterialRequirement::new(
                ingredient.material_id.clone(),
                ingredient.material_name.clone(),
                required,
                available,
                ingredient.unit.clone(),
            );

            tracing::debug!(
                "用料 {}：需求 {} {}，可用 {}，缺料 {}",
                requirement.material_id,
                requirement.required,
                requirement.unit,
                requirement.available,
                requirement.shortage_amount
            );

            requirements.push(requirement);
        }

        RequirementReport::from_requirements(requirements, warnings)
    }

    /// 每批用量 × 批次數；溢位時飽和到 `Decimal::MAX`（負用量則為 `Decimal::MIN`，稍後截為 0）
    fn scaled_requirement(qty_per_batch: Decimal, quantity: Decimal) -> Decimal {
        qty_per_batch.checked_mul(quantity).unwrap_or_else(|| {
            tracing::warn!("需求數量溢位：{} × {}，以最大值計", qty_per_batch, quantity);
            if qty_per_batch.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
    }

    /// 物料可用數量；查無物料回傳 `None`
    pub(crate) fn available_qty(
        &self,
        material_id: &str,
        projected: Option<&HashMap<String, Decimal>>,
    ) -> Option<Decimal> {
        if let Some(qty) = projected.and_then(|p| p.get(material_id)) {
            return Some(*qty);
        }

        let material = self.materials.get_material_by_id(material_id)?;
        let available = if self.config.reserve_min_stock {
            material.stock_above_minimum()
        } else {
            material.stock
        };
        Some(available)
    }

    /// 獲取計算配置引用
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// 獲取配方查詢引用
    pub fn recipes(&self) -> &R {
        &self.recipes
    }

    /// 獲取物料查詢引用
    pub fn materials(&self) -> &M {
        &self.materials
    }
}
