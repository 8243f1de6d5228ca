//! 集成測試

use chrono::NaiveDate;
use matreq::*;
use rstest::rstest;
use rust_decimal::Decimal;

/// 範例資料：Sambal Bawang 500ml 的配方與庫存
fn sambal_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for (id, name, stock, unit) in [
        ("MAT-001", "Cabai Merah", 500, "kg"),
        ("MAT-002", "Gula Pasir", 200, "kg"),
        ("MAT-003", "Bawang Putih", 80, "kg"),
        ("MAT-004", "Garam", 300, "kg"),
        ("MAT-005", "Botol 500ml", 5000, "pcs"),
    ] {
        catalog
            .add_material(Material::new(
                id.to_string(),
                name.to_string(),
                Decimal::from(stock),
                unit.to_string(),
            ))
            .unwrap();
    }

    let ingredient = |id: &str, name: &str, qty: Decimal, unit: &str| {
        RecipeIngredient::new(id.to_string(), name.to_string(), qty, unit.to_string())
    };

    catalog
        .add_recipe(
            Recipe::new("PROD-001".to_string(), "Sambal Bawang 500ml".to_string())
                .with_ingredient(ingredient("MAT-001", "Cabai Merah", Decimal::from(5), "kg"))
                .with_ingredient(ingredient("MAT-002", "Gula Pasir", Decimal::from(2), "kg"))
                .with_ingredient(ingredient("MAT-003", "Bawang Putih", Decimal::from(1), "kg"))
                .with_ingredient(ingredient("MAT-004", "Garam", Decimal::new(5, 1), "kg"))
                .with_ingredient(ingredient("MAT-005", "Botol 500ml", Decimal::from(50), "pcs")),
        )
        .unwrap();

    catalog
}

fn required(report: &RequirementReport) -> Vec<Decimal> {
    report
        .material_requirements
        .iter()
        .map(|r| r.required)
        .collect()
}

#[test]
fn test_fifty_batches_all_available() {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(50));

    assert_eq!(
        required(&report),
        vec![
            Decimal::from(250),
            Decimal::from(100),
            Decimal::from(50),
            Decimal::from(25),
            Decimal::from(2500),
        ]
    );
    assert!(report.material_requirements.iter().all(|r| !r.has_shortage));
    assert!(!report.has_shortage);
    assert!(report.can_proceed);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_hundred_fifty_batches_bottle_shortage() {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(150));

    let bottles = &report.material_requirements[4];
    assert_eq!(bottles.material_name, "Botol 500ml");
    assert_eq!(bottles.required, Decimal::from(7500));
    assert_eq!(bottles.available, Decimal::from(5000));
    assert!(bottles.has_shortage);
    assert_eq!(bottles.shortage_amount, Decimal::from(2500));

    // Bawang Putih: 150 > 80
    assert_eq!(report.material_requirements[2].shortage_amount, Decimal::from(70));

    assert!(report.has_shortage);
    assert!(!report.can_proceed);
}

#[rstest]
#[case(None, Decimal::from(50))]
#[case(Some("PROD-001"), Decimal::ZERO)]
#[case(Some("PROD-001"), Decimal::from(-3))]
#[case(Some("PROD-UNKNOWN"), Decimal::from(50))]
fn test_empty_result(#[case] product_id: Option<&str>, #[case] quantity: Decimal) {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    let report = calculator.compute_requirements(product_id, quantity);
    assert!(report.material_requirements.is_empty());
    assert!(!report.has_shortage);
    assert!(!report.can_proceed);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(33)]
#[case(100)]
fn test_required_scales_with_quantity(#[case] batches: i64) {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);
    let quantity = Decimal::from(batches);

    let report = calculator.compute_requirements(Some("PROD-001"), quantity);
    let recipe = catalog.get_recipe_by_product_id("PROD-001").unwrap();

    assert_eq!(report.material_requirements.len(), recipe.ingredients.len());
    for (line, ingredient) in report.material_requirements.iter().zip(&recipe.ingredients) {
        assert_eq!(line.material_id, ingredient.material_id);
        assert_eq!(line.required, ingredient.qty_per_batch * quantity);
        assert_eq!(
            line.shortage_amount,
            (line.required - line.available).max(Decimal::ZERO)
        );
        assert_eq!(line.has_shortage, line.shortage_amount > Decimal::ZERO);
    }
    assert_eq!(report.has_shortage, report.shortages().count() > 0);
    assert_eq!(report.can_proceed, !report.has_shortage);
}

#[test]
fn test_deleted_material_is_zero_stock() {
    let mut catalog = sambal_catalog();
    catalog.remove_material("MAT-004");
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(1));
    let salt = &report.material_requirements[3];

    assert_eq!(salt.material_name, "Garam");
    assert_eq!(salt.available, Decimal::ZERO);
    assert!(salt.has_shortage);
    assert_eq!(salt.shortage_amount, Decimal::new(5, 1));
    assert!(!report.can_proceed);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].subject_id, "MAT-004");
}

#[test]
fn test_idempotent() {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);

    let first = calculator.compute_requirements(Some("PROD-001"), Decimal::from(150));
    let second = calculator.compute_requirements(Some("PROD-001"), Decimal::from(150));
    assert_eq!(first, second);
}

#[test]
fn test_catalog_json_round_trip_gives_same_report() {
    let catalog = sambal_catalog();
    let reloaded = Catalog::from_json_str(&catalog.to_json_string().unwrap()).unwrap();

    let a = RequirementCalculator::new(&catalog, &catalog)
        .compute_requirements(Some("PROD-001"), Decimal::from(150));
    let b = RequirementCalculator::new(&reloaded, &reloaded)
        .compute_requirements(Some("PROD-001"), Decimal::from(150));
    assert_eq!(a, b);
}

#[test]
fn test_report_serializes_to_json() {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);
    let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(150));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["can_proceed"], serde_json::Value::Bool(false));
    assert_eq!(
        value["material_requirements"][4]["shortage_amount"],
        serde_json::Value::String("2500".to_string())
    );
}

#[test]
fn test_job_order_projection_across_week() {
    let catalog = sambal_catalog();
    let calculator = RequirementCalculator::new(&catalog, &catalog);
    let day = |d: u32| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();

    let orders = vec![
        JobOrder::new("PROD-001".to_string(), Decimal::from(40), day(5))
            .with_reference("JO-2025-002".to_string()),
        JobOrder::new("PROD-001".to_string(), Decimal::from(40), day(3))
            .with_reference("JO-2025-001".to_string()),
        JobOrder::new("PROD-001".to_string(), Decimal::from(20), day(7))
            .with_reference("JO-2025-003".to_string()),
    ];

    // 各自都可開工
    assert!(orders.iter().all(|o| calculator.check_job_order(o).can_proceed()));

    let checks = calculator.project_job_orders(&orders);
    let dates: Vec<_> = checks.iter().map(|c| c.planned_date).collect();
    assert_eq!(dates, vec![day(3), day(5), day(7)]);

    // Bawang Putih：80 → 40 → 0，第三張缺 20
    assert!(checks[0].can_proceed());
    assert!(checks[1].can_proceed());
    assert!(!checks[2].can_proceed());
    let garlic = &checks[2].report.material_requirements[2];
    assert_eq!(garlic.available, Decimal::ZERO);
    assert_eq!(garlic.shortage_amount, Decimal::from(20));
}

#[test]
fn test_cache_matches_calculator() {
    let mut catalog = sambal_catalog();
    let mut cache = RequirementCache::new();

    {
        let calculator = RequirementCalculator::new(&catalog, &catalog);
        for batches in [50, 150, 50] {
            let cached = cache.get_or_compute(&calculator, Some("PROD-001"), Decimal::from(batches));
            assert_eq!(
                cached,
                calculator.compute_requirements(Some("PROD-001"), Decimal::from(batches))
            );
        }
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
    }

    catalog.set_stock("MAT-005", Decimal::from(10000)).unwrap();
    cache.mark_material_changed("MAT-005");

    let calculator = RequirementCalculator::new(&catalog, &catalog);
    let report = cache.get_or_compute(&calculator, Some("PROD-001"), Decimal::from(150));
    assert!(!report.material_requirements[4].has_shortage);
    // 仍受 Bawang Putih 限制
    assert!(!report.can_proceed);
}
