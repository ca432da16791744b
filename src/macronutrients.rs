//! Macronutrient allocation for a calorie target.
//!
//! Protein is sized from lean mass, fat from bodyweight, and carbohydrates
//! take whatever energy is left. Protein and fat minimums win over the
//! calorie target: when they alone exceed it, the target is raised to match.

use crate::domain::{
    BodyType, Goal, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, MacroPlan,
};

/// Upper bound on daily protein (g).
pub const MAX_PROTEIN_GRAMS: u32 = 220;

/// Lower bound on daily fat (g).
pub const MIN_FAT_GRAMS: u32 = 50;

/// Upper bound on daily fat (g).
pub const MAX_FAT_GRAMS: u32 = 110;

/// Fat grams per kg of bodyweight.
const FAT_GRAMS_PER_KG: f64 = 0.9;

/// Protein grams per kg of lean body mass.
pub fn protein_multiplier(effective_body_type: BodyType, effective_goal: Goal) -> f64 {
    let maintaining = effective_goal == Goal::Maintain;
    match (effective_body_type, maintaining) {
        (BodyType::HighBodyFat, true) => 1.4,
        (BodyType::HighBodyFat, false) => 1.6,
        (BodyType::Lean, true) => 2.0,
        (BodyType::Lean, false) => 2.4,
        (BodyType::Normal, true) => 1.8,
        (BodyType::Normal, false) => 2.0,
    }
}

/// Daily protein in grams, truncated and capped at 220 g.
pub fn protein_grams(lean_body_mass_kg: f64, multiplier: f64) -> u32 {
    ((lean_body_mass_kg * multiplier) as u32).min(MAX_PROTEIN_GRAMS)
}

/// Daily fat in grams, truncated and clamped to [50, 110] g.
pub fn fat_grams(weight_kg: f64) -> u32 {
    ((weight_kg * FAT_GRAMS_PER_KG) as u32)
        .min(MAX_FAT_GRAMS)
        .max(MIN_FAT_GRAMS)
}

/// Splits `target_calories` into protein, fat and carbohydrate grams.
///
/// The returned plan carries the target unless protein and fat alone need
/// more energy, in which case calories become exactly their sum and carbs 0.
pub fn allocate(target_calories: u32, protein: u32, fat: u32) -> MacroPlan {
    let fixed_calories = protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT;

    match target_calories.checked_sub(fixed_calories) {
        Some(remaining) => MacroPlan {
            calories: target_calories,
            protein_grams: protein,
            fat_grams: fat,
            carb_grams: remaining / KCAL_PER_GRAM_CARBS,
        },
        None => {
            log::info!(
                "Protein and fat need {} kcal, raising target from {} kcal",
                fixed_calories,
                target_calories
            );
            MacroPlan {
                calories: fixed_calories,
                protein_grams: protein,
                fat_grams: fat,
                carb_grams: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_multiplier_table() {
        assert_eq!(protein_multiplier(BodyType::HighBodyFat, Goal::Maintain), 1.4);
        assert_eq!(protein_multiplier(BodyType::HighBodyFat, Goal::Lose), 1.6);
        assert_eq!(protein_multiplier(BodyType::HighBodyFat, Goal::Gain), 1.6);
        assert_eq!(protein_multiplier(BodyType::Lean, Goal::Maintain), 2.0);
        assert_eq!(protein_multiplier(BodyType::Lean, Goal::Lose), 2.4);
        assert_eq!(protein_multiplier(BodyType::Normal, Goal::Maintain), 1.8);
        assert_eq!(protein_multiplier(BodyType::Normal, Goal::Gain), 2.0);
    }

    #[test]
    fn test_protein_truncates() {
        // 68 × 1.8 = 122.4
        assert_eq!(protein_grams(68.0, 1.8), 122);
        // 40.25 × 2.4 = 96.6
        assert_eq!(protein_grams(40.25, 2.4), 96);
    }

    #[test]
    fn test_protein_capped() {
        // 100 × 2.4 = 240 -> 220
        assert_eq!(protein_grams(100.0, 2.4), MAX_PROTEIN_GRAMS);
        assert_eq!(protein_grams(110.0, 2.0), MAX_PROTEIN_GRAMS);
    }

    #[test]
    fn test_fat_within_range() {
        // 80 × 0.9 = 72
        assert_eq!(fat_grams(80.0), 72);
        // 75.5 × 0.9 = 67.95
        assert_eq!(fat_grams(75.5), 67);
    }

    #[test]
    fn test_fat_clamped() {
        // 50 × 0.9 = 45 -> 50
        assert_eq!(fat_grams(50.0), MIN_FAT_GRAMS);
        // 150 × 0.9 = 135 -> 110
        assert_eq!(fat_grams(150.0), MAX_FAT_GRAMS);
    }

    #[test]
    fn test_fat_clamp_edges() {
        // 55.56 × 0.9 = 50.004
        assert_eq!(fat_grams(55.56), 50);
        // 55.5 × 0.9 = 49.95 -> 50
        assert_eq!(fat_grams(55.5), MIN_FAT_GRAMS);
        // 122.22 × 0.9 = 109.998, truncated below the cap
        assert_eq!(fat_grams(122.22), 109);
        // 122.3 × 0.9 = 110.07 -> 110
        assert_eq!(fat_grams(122.3), MAX_FAT_GRAMS);
    }

    #[test]
    fn test_allocate_carbs_take_remainder() {
        let plan = allocate(2850, 122, 72);
        assert_eq!(
            plan,
            MacroPlan {
                calories: 2850,
                protein_grams: 122,
                fat_grams: 72,
                carb_grams: 428,
            }
        );
        // 1714 kcal remain, 2 are lost to truncation
        assert_eq!(plan.calories - plan.macro_calories(), 2);
    }

    #[test]
    fn test_allocate_exact_fit() {
        let plan = allocate(100 * 4 + 60 * 9, 100, 60);
        assert_eq!(plan.carb_grams, 0);
        assert_eq!(plan.calories, 940);
        assert_eq!(plan.macro_calories(), plan.calories);
    }

    #[test]
    fn test_allocate_raises_target_to_macro_floor() {
        // 220 × 4 + 110 × 9 = 1870 > 1500
        let plan = allocate(1500, 220, 110);
        assert_eq!(plan.calories, 1870);
        assert_eq!(plan.carb_grams, 0);
        assert_eq!(plan.macro_calories(), plan.calories);
    }
}
