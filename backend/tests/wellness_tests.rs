//! Tests for the wellness calculators

use shared::{compute_bmi, sum_calories, BmiCategory};

mod bmi_values {
    use super::*;

    #[test]
    fn textbook_case_rounds_to_one_decimal() {
        // 70 / 1.75^2 = 22.857...
        let result = compute_bmi(70.0, 1.75).unwrap();
        assert_eq!(result.value, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn centimeter_heights_are_converted() {
        assert_eq!(compute_bmi(70.0, 175.0), compute_bmi(70.0, 1.75));
        assert_eq!(compute_bmi(55.0, 160.0), compute_bmi(55.0, 1.6));
    }

    #[test]
    fn recomputation_is_deterministic() {
        let first = compute_bmi(82.5, 1.83).unwrap();
        let second = compute_bmi(82.5, 1.83).unwrap();
        assert_eq!(first, second);
    }
}

mod bmi_categories {
    use super::*;

    fn category_for(bmi: f64) -> BmiCategory {
        // Height of 1m makes weight equal to BMI
        compute_bmi(bmi, 1.0).unwrap().category
    }

    #[test]
    fn band_boundaries_belong_to_the_upper_band() {
        assert_eq!(category_for(18.4), BmiCategory::Underweight);
        assert_eq!(category_for(18.5), BmiCategory::Normal);
        assert_eq!(category_for(24.9), BmiCategory::Normal);
        assert_eq!(category_for(25.0), BmiCategory::Overweight);
        assert_eq!(category_for(29.9), BmiCategory::Overweight);
        assert_eq!(category_for(30.0), BmiCategory::Obese);
    }
}

mod bmi_rejections {
    use super::*;

    #[test]
    fn nonpositive_inputs_yield_nothing() {
        assert!(compute_bmi(0.0, 1.75).is_none());
        assert!(compute_bmi(-70.0, 1.75).is_none());
        assert!(compute_bmi(70.0, 0.0).is_none());
        assert!(compute_bmi(70.0, -175.0).is_none());
    }

    #[test]
    fn non_finite_inputs_yield_nothing() {
        assert!(compute_bmi(f64::NAN, 1.75).is_none());
        assert!(compute_bmi(70.0, f64::INFINITY).is_none());
    }

    #[test]
    fn implausible_heights_yield_nothing() {
        assert!(compute_bmi(70.0, 0.4).is_none());
        assert!(compute_bmi(70.0, 0.5).is_none());
        assert!(compute_bmi(70.0, 2.5).is_none());
        assert!(compute_bmi(70.0, 260.0).is_none());
    }
}

mod calorie_totals {
    use super::*;

    #[test]
    fn totals_follow_the_catalog() {
        // red-wine 125, strawberry 4, mint 1
        assert_eq!(sum_calories(["red-wine", "strawberry", "mint"]), 130);
    }

    #[test]
    fn unknown_ids_contribute_nothing() {
        assert_eq!(
            sum_calories(["red-wine", "unobtainium"]),
            sum_calories(["red-wine"])
        );
    }

    #[test]
    fn empty_list_totals_zero() {
        assert_eq!(sum_calories(std::iter::empty::<&str>()), 0);
    }
}
