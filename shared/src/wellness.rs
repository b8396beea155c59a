//! Wellness calculators: calorie totalizer and BMI
//!
//! Both are pure and recomputed on demand; invalid input yields no result
//! rather than an error.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::find_ingredient;

/// Sum calories over a list of catalog ids; unknown ids contribute nothing.
pub fn sum_calories<'a, I>(ingredient_ids: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    ingredient_ids
        .into_iter()
        .filter_map(find_ingredient)
        .map(|ing| ing.calories)
        .sum()
}

/// BMI classification bands
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Result of a BMI computation
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one decimal place, half-up
    pub value: f64,
    pub category: BmiCategory,
}

/// Compute BMI from weight in kilograms and a height that may be given in
/// meters or centimeters.
///
/// Heights of 3 or below are taken as meters, anything larger as centimeters.
/// After conversion the height must land strictly inside (0.5, 2.5) meters;
/// anything else is treated as nonsensical input and rejected.
pub fn compute_bmi(weight_kg: f64, height_raw: f64) -> Option<BmiResult> {
    if !weight_kg.is_finite() || !height_raw.is_finite() {
        return None;
    }
    if weight_kg <= 0.0 || height_raw <= 0.0 {
        return None;
    }

    let height_m = if height_raw <= 3.0 {
        height_raw
    } else {
        height_raw / 100.0
    };
    if height_m <= 0.5 || height_m >= 2.5 {
        return None;
    }

    let bmi = weight_kg / (height_m * height_m);
    let value = Decimal::from_f64(bmi)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()?;

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Some(BmiResult { value, category })
}
