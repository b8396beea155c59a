//! Static ingredient catalog for the mix builder

use serde::Serialize;

/// Category of a drink ingredient
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Base,
    Fruit,
    Addon,
}

/// A single drink component a visitor can add to a mix
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: u32,
    pub category: IngredientCategory,
}

/// The full ingredient table, defined at compile time and never mutated.
///
/// Calorie values are per typical serving in a mixed drink.
pub const INGREDIENT_CATALOG: &[Ingredient] = &[
    // Bases
    Ingredient { id: "red-wine", name: "Red Wine", calories: 125, category: IngredientCategory::Base },
    Ingredient { id: "white-wine", name: "White Wine", calories: 121, category: IngredientCategory::Base },
    Ingredient { id: "rose", name: "Rosé", calories: 120, category: IngredientCategory::Base },
    Ingredient { id: "sparkling", name: "Sparkling Wine", calories: 90, category: IngredientCategory::Base },
    Ingredient { id: "grape-juice", name: "Grape Juice", calories: 60, category: IngredientCategory::Base },
    // Fruits
    Ingredient { id: "strawberry", name: "Strawberry", calories: 4, category: IngredientCategory::Fruit },
    Ingredient { id: "lemon", name: "Lemon", calories: 3, category: IngredientCategory::Fruit },
    Ingredient { id: "orange", name: "Orange", calories: 10, category: IngredientCategory::Fruit },
    Ingredient { id: "mango", name: "Mango", calories: 15, category: IngredientCategory::Fruit },
    Ingredient { id: "pineapple", name: "Pineapple", calories: 12, category: IngredientCategory::Fruit },
    Ingredient { id: "berries", name: "Mixed Berries", calories: 8, category: IngredientCategory::Fruit },
    Ingredient { id: "peach", name: "Peach", calories: 10, category: IngredientCategory::Fruit },
    Ingredient { id: "apple", name: "Apple", calories: 14, category: IngredientCategory::Fruit },
    // Add-ons
    Ingredient { id: "mint", name: "Fresh Mint", calories: 1, category: IngredientCategory::Addon },
    Ingredient { id: "honey", name: "Honey", calories: 21, category: IngredientCategory::Addon },
    Ingredient { id: "ginger", name: "Ginger", calories: 2, category: IngredientCategory::Addon },
    Ingredient { id: "soda", name: "Soda Water", calories: 0, category: IngredientCategory::Addon },
    Ingredient { id: "tonic", name: "Tonic Water", calories: 30, category: IngredientCategory::Addon },
    Ingredient { id: "syrup", name: "Simple Syrup", calories: 50, category: IngredientCategory::Addon },
    Ingredient { id: "basil", name: "Basil", calories: 1, category: IngredientCategory::Addon },
    Ingredient { id: "cinnamon", name: "Cinnamon", calories: 2, category: IngredientCategory::Addon },
];

/// Look up an ingredient by its catalog id
pub fn find_ingredient(id: &str) -> Option<&'static Ingredient> {
    INGREDIENT_CATALOG.iter().find(|ing| ing.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in INGREDIENT_CATALOG.iter().enumerate() {
            for b in &INGREDIENT_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate ingredient id {}", a.id);
            }
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find_ingredient("red-wine").map(|i| i.calories), Some(125));
        assert!(find_ingredient("motor-oil").is_none());
    }
}
