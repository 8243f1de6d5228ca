//! # Material Requirement Calculation Engine
//!
//! 依配方與批次數計算物料需求並標記缺料

pub mod calculator;
pub mod projection;

// Re-export 主要類型
pub use calculator::RequirementCalculator;
pub use projection::JobOrderCheck;

use matreq_core::MaterialRequirement;
use serde::{Deserialize, Serialize};

/// 物料需求計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementReport {
    /// 各物料需求（依配方順序）
    pub material_requirements: Vec<MaterialRequirement>,

    /// 是否有任何物料缺料
    pub has_shortage: bool,

    /// 是否可以開工
    pub can_proceed: bool,

    /// 警告信息
    pub warnings: Vec<RequirementWarning>,
}

impl RequirementReport {
    /// 創建空的計算結果（無法開工）
    pub fn empty() -> Self {
        Self {
            material_requirements: Vec::new(),
            has_shortage: false,
            can_proceed: false,
            warnings: Vec::new(),
        }
    }

    /// 由需求行彙總結果
    pub fn from_requirements(
        material_requirements: Vec<MaterialRequirement>,
        warnings: Vec<RequirementWarning>,
    ) -> Self {
        let has_shortage = material_requirements.iter().any(|r| r.has_shortage);
        Self {
            material_requirements,
            has_shortage,
            can_proceed: !has_shortage,
            warnings,
        }
    }

    /// 缺料的需求行
    pub fn shortages(&self) -> impl Iterator<Item = &MaterialRequirement> {
        self.material_requirements.iter().filter(|r| r.has_shortage)
    }

    /// 是否為空結果
    pub fn is_empty(&self) -> bool {
        self.material_requirements.is_empty()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: RequirementWarning) {
        self.warnings.push(warning);
    }
}

/// 計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementWarning {
    /// 相關的物料或產品ID
    pub subject_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl RequirementWarning {
    pub fn new(subject_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject_id,
            message,
            severity,
        }
    }

    pub fn info(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Info)
    }

    pub fn warning(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
