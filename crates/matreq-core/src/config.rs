//! 需求計算配置

use serde::{Deserialize, Serialize};

/// 需求計算參數配置
///
/// 預設值即為標準行為：可用數量 = 現有庫存，查無物料時記錄警告。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// 是否保留最低庫存
    /// - false: 可用數量 = 現有庫存（預設）
    /// - true: 可用數量 = max(0, 現有庫存 - 最低庫存)
    pub reserve_min_stock: bool,

    /// 是否在結果中記錄警告（查無物料、空配方）
    pub record_warnings: bool,
}

impl CalculatorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            reserve_min_stock: false,
            record_warnings: true,
        }
    }

    /// 建構器模式：設置是否保留最低庫存
    ///
    /// # 範例
    /// ```
    /// # use matreq_core::CalculatorConfig;
    /// let config = CalculatorConfig::new().with_reserve_min_stock(true);
    /// assert!(config.reserve_min_stock);
    /// ```
    pub fn with_reserve_min_stock(mut self, reserve: bool) -> Self {
        self.reserve_min_stock = reserve;
        self
    }

    /// 建構器模式：設置是否記錄警告
    pub fn with_record_warnings(mut self, record: bool) -> Self {
        self.record_warnings = record;
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
