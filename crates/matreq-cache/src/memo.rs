//! 需求計算結果緩存

use matreq_calc::{RequirementCalculator, RequirementReport};
use matreq_core::{CalculatorConfig, MaterialRepository, RecipeRepository};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::dirty_tracking::DirtyTracker;

/// 緩存條目
#[derive(Debug)]
struct CacheEntry {
    report: RequirementReport,
    /// 計算時配方引用的物料
    material_ids: HashSet<String>,
}

/// 緩存命中統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// 需求計算結果緩存
///
/// 以（產品ID, 批次數, 批次數小數位）為鍵，小數位不同（50 與 50.0）分開存放，
/// 命中結果與直接計算逐位相同。參考資料變更後呼叫 `mark_*_changed`，
/// 下次查詢前會移除受影響的條目。計算器以參數傳入，
/// 緩存本身不持有目錄的引用，目錄可在兩次查詢之間修改；
/// 換用另一份目錄時需先 `clear()`。計算配置與上次不同時自動清空。
#[derive(Debug, Default)]
pub struct RequirementCache {
    entries: HashMap<(String, Decimal, u32), CacheEntry>,
    /// 目前條目所依據的計算配置
    config: Option<CalculatorConfig>,
    dirty: DirtyTracker,
    stats: CacheStats,
}

impl RequirementCache {
    /// 創建空緩存
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得緩存結果，未命中時計算並存入
    ///
    /// 無效請求（未指定產品、批次數 ≤ 0）不進緩存。
    pub fn get_or_compute<R, M>(
        &mut self,
        calculator: &RequirementCalculator<R, M>,
        product_id: Option<&str>,
        quantity: Decimal,
    ) -> RequirementReport
    where
        R: RecipeRepository,
        M: MaterialRepository,
    {
        let product_id = match product_id {
            Some(id) if quantity > Decimal::ZERO => id,
            _ => return calculator.compute_requirements(product_id, quantity),
        };

        self.sync_config(calculator.config());
        self.sweep();

        let key = (product_id.to_string(), quantity, quantity.scale());
        if let Some(entry) = self.entries.get(&key) {
            self.stats.hits += 1;
            return entry.report.clone();
        }

        self.stats.misses += 1;
        let report = calculator.compute_requirements(Some(product_id), quantity);
        let material_ids: HashSet<String> = calculator
            .recipes()
            .get_recipe_by_product_id(product_id)
            .map(|r| r.material_ids().map(str::to_string).collect())
            .unwrap_or_default();

        self.entries.insert(
            key,
            CacheEntry {
                report: report.clone(),
                material_ids,
            },
        );
        report
    }

    /// 標記產品配方已變更（含新增、刪除）
    pub fn mark_product_changed(&mut self, product_id: &str) {
        self.dirty.mark_product_dirty(product_id.to_string());
    }

    /// 標記物料已變更（含庫存調整、新增、刪除）
    pub fn mark_material_changed(&mut self, material_id: &str) {
        self.dirty.mark_material_dirty(material_id.to_string());
    }

    /// 清空緩存
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty.clear();
        self.config = None;
    }

    /// 緩存條目數（已標記但尚未移除的也計入）
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// 計算配置改變時清空所有條目
    fn sync_config(&mut self, config: &CalculatorConfig) {
        if self.config.as_ref() == Some(config) {
            return;
        }
        if self.config.is_some() {
            tracing::debug!("計算配置已變更，清空緩存 {} 筆", self.entries.len());
            self.entries.clear();
            self.dirty.clear();
        }
        self.config = Some(config.clone());
    }

    /// 移除受髒標記影響的條目
    fn sweep(&mut self) {
        if self.dirty.is_empty() {
            return;
        }

        let before = self.entries.len();
        let dirty = &self.dirty;
        self.entries.retain(|(product_id, _, _), entry| {
            !dirty.is_product_dirty(product_id)
                && !entry.material_ids.iter().any(|m| dirty.is_material_dirty(m))
        });
        tracing::debug!("緩存清理：移除 {} 筆", before - self.entries.len());

        self.dirty.clear();
    }
}
