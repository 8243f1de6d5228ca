//! 物料需求（計算結果）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一物料的需求與缺料狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// 物料ID
    pub material_id: String,

    /// 物料名稱（取自配方用料）
    pub material_name: String,

    /// 需求數量
    pub required: Decimal,

    /// 可用數量（計算當下的庫存快照）
    pub available: Decimal,

    /// 計量單位
    pub unit: String,

    /// 是否缺料
    pub has_shortage: bool,

    /// 缺料數量
    pub shortage_amount: Decimal,
}

impl MaterialRequirement {
    /// 由需求與可用數量建立需求行
    ///
    /// 兩個數量都會截到 0 以上，缺料數量 = max(0, 需求 - 可用)。
    pub fn new(
        material_id: String,
        material_name: String,
        required: Decimal,
        available: Decimal,
        unit: String,
    ) -> Self {
        let required = required.max(Decimal::ZERO);
        let available = available.max(Decimal::ZERO);
        let has_shortage = required > available;
        let shortage_amount = if has_shortage {
            required - available
        } else {
            Decimal::ZERO
        };

        Self {
            material_id,
            material_name,
            required,
            available,
            unit,
            has_shortage,
            shortage_amount,
        }
    }

    /// 扣除需求後的剩餘庫存（不為負）
    pub fn remaining_after(&self) -> Decimal {
        (self.available - self.required).max(Decimal::ZERO)
    }
}
