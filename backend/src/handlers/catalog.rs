//! Catalog handlers
//!
//! Both catalogs are compile-time constants, so these endpoints simply
//! serialize them.

use axum::Json;
use shared::models::{Ingredient, Package, INGREDIENT_CATALOG, PACKAGE_CATALOG};

/// List every ingredient available in the mix builder
pub async fn list_ingredients() -> Json<&'static [Ingredient]> {
    Json(INGREDIENT_CATALOG)
}

/// List the fixed-price service packages
pub async fn list_packages() -> Json<&'static [Package]> {
    Json(PACKAGE_CATALOG)
}
