//! 原物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料（由庫存模組維護，需求計算只讀取）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID
    pub id: String,

    /// 物料名稱
    pub name: String,

    /// 現有庫存
    pub stock: Decimal,

    /// 計量單位
    pub unit: String,

    /// 最低庫存
    #[serde(default)]
    pub min_stock: Decimal,
}

impl Material {
    /// 創建新的物料
    pub fn new(id: String, name: String, stock: Decimal, unit: String) -> Self {
        Self {
            id,
            name,
            stock,
            unit,
            min_stock: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最低庫存
    pub fn with_min_stock(mut self, min_stock: Decimal) -> Self {
        self.min_stock = min_stock;
        self
    }

    /// 檢查庫存是否低於最低庫存
    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.min_stock
    }

    /// 獲取需要補充的數量
    pub fn replenishment_needed(&self) -> Decimal {
        if self.is_below_minimum() {
            self.min_stock - self.stock
        } else {
            Decimal::ZERO
        }
    }

    /// 扣除最低庫存後可動用的數量（不為負）
    pub fn stock_above_minimum(&self) -> Decimal {
        (self.stock - self.min_stock).max(Decimal::ZERO)
    }
}
