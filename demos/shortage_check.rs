//! 缺料檢查示例
//!
//! ```text
//! RUST_LOG=debug cargo run --example shortage_check
//! ```

use chrono::NaiveDate;
use matreq::{Catalog, JobOrder, RequirementCalculator};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const CATALOG_JSON: &str = r#"{
    "materials": [
        {"id": "MAT-001", "name": "Cabai Merah", "stock": "500", "unit": "kg", "min_stock": "100"},
        {"id": "MAT-002", "name": "Gula Pasir", "stock": "200", "unit": "kg", "min_stock": "50"},
        {"id": "MAT-003", "name": "Bawang Putih", "stock": "80", "unit": "kg", "min_stock": "100"},
        {"id": "MAT-004", "name": "Garam", "stock": "300", "unit": "kg", "min_stock": "50"},
        {"id": "MAT-005", "name": "Botol 500ml", "stock": "5000", "unit": "pcs", "min_stock": "1000"}
    ],
    "recipes": [
        {
            "product_id": "PROD-001",
            "product_name": "Sambal Bawang 500ml",
            "ingredients": [
                {"material_id": "MAT-001", "material_name": "Cabai Merah", "qty_per_batch": "5", "unit": "kg"},
                {"material_id": "MAT-002", "material_name": "Gula Pasir", "qty_per_batch": "2", "unit": "kg"},
                {"material_id": "MAT-003", "material_name": "Bawang Putih", "qty_per_batch": "1", "unit": "kg"},
                {"material_id": "MAT-004", "material_name": "Garam", "qty_per_batch": "0.5", "unit": "kg"},
                {"material_id": "MAT-005", "material_name": "Botol 500ml", "qty_per_batch": "50", "unit": "pcs"}
            ]
        }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 缺料檢查示例 ===\n");

    let catalog = Catalog::from_json_str(CATALOG_JSON)?;
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    for batches in [50, 150] {
        let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(batches));
        println!("PROD-001 × {} 批:", batches);
        for line in &report.material_requirements {
            println!(
                "  - {:<14} 需求 {:>6} {:<3} 可用 {:>6} {}",
                line.material_name,
                line.required,
                line.unit,
                line.available,
                if line.has_shortage {
                    format!("缺 {}", line.shortage_amount)
                } else {
                    "OK".to_string()
                }
            );
        }
        println!("  可開工: {}\n", report.can_proceed);
    }

    let day = |d: u32| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
    let orders = vec![
        JobOrder::new("PROD-001".to_string(), Decimal::from(40), day(3))
            .with_reference("JO-2025-001".to_string()),
        JobOrder::new("PROD-001".to_string(), Decimal::from(40), day(5))
            .with_reference("JO-2025-002".to_string()),
        JobOrder::new("PROD-001".to_string(), Decimal::from(20), day(7))
            .with_reference("JO-2025-003".to_string()),
    ];

    println!("工單累計推算:");
    for check in calculator.project_job_orders(&orders) {
        let shortages: Vec<_> = check
            .report
            .shortages()
            .map(|s| format!("{} 缺 {} {}", s.material_name, s.shortage_amount, s.unit))
            .collect();
        println!(
            "  - {} {} 可開工: {} {}",
            check.planned_date,
            check.job_order_id,
            check.can_proceed(),
            shortages.join(", ")
        );
    }

    println!("\n低於最低庫存:");
    for material in catalog.low_stock_materials() {
        println!(
            "  - {} 現有 {} {}，需補 {}",
            material.name,
            material.stock,
            material.unit,
            material.replenishment_needed()
        );
    }

    Ok(())
}
