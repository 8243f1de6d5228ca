//! 生產工單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產工單（建立前會先檢查物料是否足夠）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOrder {
    /// 工單ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 生產批次數
    pub quantity: Decimal,

    /// 計劃生產日期
    pub planned_date: NaiveDate,

    /// 工單編號（如 JO-2025-001）
    pub reference: Option<String>,
}

impl JobOrder {
    /// 創建新的工單
    pub fn new(product_id: String, quantity: Decimal, planned_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            planned_date,
            reference: None,
        }
    }

    /// 建構器模式：設置工單編號
    pub fn with_reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }

    /// 批次數是否有效（大於 0）
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}
