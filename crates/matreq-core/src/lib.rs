//! # Material Requirement Core
//!
//! 核心資料模型、查詢介面與類型定義

pub mod catalog;
pub mod config;
pub mod job_order;
pub mod material;
pub mod recipe;
pub mod repository;
pub mod requirement;

// Re-export 主要類型
pub use catalog::Catalog;
pub use config::CalculatorConfig;
pub use job_order::JobOrder;
pub use material::Material;
pub use recipe::{Recipe, RecipeIngredient};
pub use repository::{MaterialRepository, RecipeRepository};
pub use requirement::MaterialRequirement;

/// 物料需求錯誤類型
///
/// 只有目錄維護（新增、修改、載入）會失敗，需求計算本身不回傳錯誤。
#[derive(Debug, thiserror::Error)]
pub enum MatreqError {
    #[error("物料已存在: {0}")]
    DuplicateMaterial(String),

    #[error("找不到物料: {0}")]
    MaterialNotFound(String),

    #[error("配方已存在: {0}")]
    DuplicateRecipe(String),

    #[error("庫存不可為負數: 物料 {material_id}, 數量 {quantity}")]
    NegativeStock {
        material_id: String,
        quantity: rust_decimal::Decimal,
    },

    #[error("配方用量不可為負數: 產品 {product_id}, 物料 {material_id}")]
    NegativeIngredientQuantity {
        product_id: String,
        material_id: String,
    },

    #[error("目錄 JSON 處理失敗: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatreqError>;
