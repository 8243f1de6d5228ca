//! 工單物料檢查與累計庫存推算

use chrono::NaiveDate;
use matreq_core::{JobOrder, MaterialRepository, RecipeRepository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{RequirementCalculator, RequirementReport};

/// 單張工單的物料檢查結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrderCheck {
    /// 工單ID
    pub job_order_id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 計劃生產日期
    pub planned_date: NaiveDate,

    /// 物料需求結果
    pub report: RequirementReport,
}

impl JobOrderCheck {
    /// 是否可以開工
    pub fn can_proceed(&self) -> bool {
        self.report.can_proceed
    }
}

impl<R, M> RequirementCalculator<R, M>
where
    R: RecipeRepository,
    M: MaterialRepository,
{
    /// 以目前庫存檢查單張工單
    pub fn check_job_order(&self, order: &JobOrder) -> JobOrderCheck {
        let report = self.compute_requirements(Some(&order.product_id), order.quantity);
        JobOrderCheck {
            job_order_id: order.id,
            product_id: order.product_id.clone(),
            planned_date: order.planned_date,
            report,
        }
    }

    /// 累計推算多張工單
    ///
    /// 依計劃日期處理（同日保持輸入順序），每張可開工的工單會扣減推算庫存，
    /// 後續工單以扣減後的庫存檢查。無法開工的工單不扣庫存。
    /// 回傳順序即處理順序。
    pub fn project_job_orders(&self, orders: &[JobOrder]) -> Vec<JobOrderCheck> {
        tracing::info!("開始工單累計推算：{} 張", orders.len());

        let mut sorted: Vec<&JobOrder> = orders.iter().collect();
        sorted.sort_by_key(|o| o.planned_date);

        // 推算庫存（物料ID → 剩餘可用）
        let mut projected: HashMap<String, Decimal> = HashMap::new();
        let mut checks = Vec::with_capacity(sorted.len());

        for order in sorted {
            let report = self.compute_with_projection(
                Some(&order.product_id),
                order.quantity,
                Some(&projected),
            );

            if report.can_proceed {
                for line in &report.material_requirements {
                    // 查無物料的用料不建立推算庫存，保持警告行為
                    if self.materials().get_material_by_id(&line.material_id).is_none() {
                        continue;
                    }
                    let remaining = projected
                        .entry(line.material_id.clone())
                        .or_insert(line.available);
                    *remaining = (*remaining - line.required).max(Decimal::ZERO);
                }
            } else {
                tracing::debug!(
                    "工單 {} ({}) 無法開工，不扣減推算庫存",
                    order.id,
                    order.product_id
                );
            }

            checks.push(JobOrderCheck {
                job_order_id: order.id,
                product_id: order.product_id.clone(),
                planned_date: order.planned_date,
                report,
            });
        }

        tracing::info!(
            "工單累計推算完成：可開工 {} 張",
            checks.iter().filter(|c| c.can_proceed()).count()
        );

        checks
    }
}
