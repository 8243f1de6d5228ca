//! # Material Requirement
//!
//! 生產工單物料需求與缺料檢查
//!
//! ```
//! use matreq::{Catalog, Material, Recipe, RecipeIngredient, RequirementCalculator};
//! use rust_decimal::Decimal;
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add_material(Material::new(
//!         "MAT-005".to_string(),
//!         "Botol 500ml".to_string(),
//!         Decimal::from(5000),
//!         "pcs".to_string(),
//!     ))
//!     .unwrap();
//! catalog
//!     .add_recipe(
//!         Recipe::new("PROD-001".to_string(), "Sambal Bawang 500ml".to_string()).with_ingredient(
//!             RecipeIngredient::new(
//!                 "MAT-005".to_string(),
//!                 "Botol 500ml".to_string(),
//!                 Decimal::from(50),
//!                 "pcs".to_string(),
//!             ),
//!         ),
//!     )
//!     .unwrap();
//!
//! let calculator = RequirementCalculator::new(&catalog, &catalog);
//! let report = calculator.compute_requirements(Some("PROD-001"), Decimal::from(150));
//! assert!(!report.can_proceed);
//! assert_eq!(report.material_requirements[0].shortage_amount, Decimal::from(2500));
//! ```

pub use matreq_cache::{CacheStats, RequirementCache};
pub use matreq_calc::{
    JobOrderCheck, RequirementCalculator, RequirementReport, RequirementWarning, WarningSeverity,
};
pub use matreq_core::{
    CalculatorConfig, Catalog, JobOrder, Material, MaterialRepository, MaterialRequirement,
    MatreqError, Recipe, RecipeIngredient, RecipeRepository, Result,
};
