//! WebAssembly module for the Velvet Pour website
//!
//! Provides client-side computation for:
//! - Mix builder selection and calorie totals
//! - Shareable mix references
//! - BMI calculator on the wellness page

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;
pub use shared::wellness::*;

/// The full ingredient catalog as a JSON array
#[wasm_bindgen]
pub fn ingredient_catalog() -> String {
    serde_json::to_string(INGREDIENT_CATALOG).unwrap_or_else(|_| "[]".to_string())
}

/// Total calories of a comma-separated list of ingredient ids
#[wasm_bindgen]
pub fn mix_total_calories(ingredient_ids_csv: &str) -> u32 {
    sum_calories(ingredient_ids_csv.split(',').filter(|id| !id.is_empty()))
}

/// Toggle one ingredient in a selection; returns the new id list
#[wasm_bindgen]
pub fn toggle_ingredient(ingredient_ids_csv: &str, ingredient_id: &str) -> String {
    let (_, mut selection) = MixSelection::from_share_query(None, Some(ingredient_ids_csv));
    selection.toggle(ingredient_id);
    selection.ingredient_ids().join(",")
}

/// Build the shareable query string for a named selection
#[wasm_bindgen]
pub fn build_share_reference(mix_name: &str, ingredient_ids_csv: &str) -> String {
    let (_, selection) = MixSelection::from_share_query(None, Some(ingredient_ids_csv));
    selection.share_query(mix_name)
}

/// Parse a shared mix reference back into name, ingredients and calories
#[wasm_bindgen]
pub fn parse_share_reference(
    recipe: Option<String>,
    ingredient_ids_csv: Option<String>,
) -> String {
    let (name, selection) =
        MixSelection::from_share_query(recipe.as_deref(), ingredient_ids_csv.as_deref());
    serde_json::json!({
        "name": name,
        "ingredientIds": selection.ingredient_ids(),
        "ingredientNames": selection.ingredient_names(),
        "totalCalories": selection.total_calories(),
    })
    .to_string()
}

/// Compute BMI; returns a JSON object or the string `null` for invalid input
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height: f64) -> String {
    match compute_bmi(weight_kg, height) {
        Some(result) => serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Client-side email check mirroring the backend rule
#[wasm_bindgen]
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}
