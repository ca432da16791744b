//! Body composition estimates from the declared profile.
//!
//! Classifies the effective body type from BMI, then estimates body fat
//! fraction from a (gender, body type) table with an age penalty, and
//! derives lean body mass from it.

use crate::domain::{BodyType, Gender};

/// BMI above which a declared body type is overridden to high body fat.
pub const BMI_HIGH_BODY_FAT_OVERRIDE: f64 = 30.0;

/// Age after which the body fat estimate rises.
const AGE_PENALTY_START_YEARS: u32 = 30;

/// Body fat fraction added per year of age above 30.
const AGE_PENALTY_PER_YEAR: f64 = 0.001;

/// Calculates Body Mass Index.
///
/// Formula:
/// ```text
/// BMI = weight_kg / height_m²
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Resolves the body type the rest of the calculation works with.
///
/// Self-reported body type tends to understate adiposity at high BMI, so
/// anything above BMI 30 counts as high body fat.
pub fn effective_body_type(declared: BodyType, bmi: f64) -> BodyType {
    if bmi > BMI_HIGH_BODY_FAT_OVERRIDE && declared != BodyType::HighBodyFat {
        BodyType::HighBodyFat
    } else {
        declared
    }
}

/// Base body fat fraction for a gender and body type, before age adjustment.
fn base_body_fat(gender: Gender, body_type: BodyType) -> f64 {
    match (gender, body_type) {
        (Gender::Male, BodyType::Lean) => 0.10,
        (Gender::Male, BodyType::Normal) => 0.15,
        (Gender::Male, BodyType::HighBodyFat) => 0.30,
        (Gender::Female, BodyType::Lean) => 0.18,
        (Gender::Female, BodyType::Normal) => 0.25,
        (Gender::Female, BodyType::HighBodyFat) => 0.40,
    }
}

/// Estimates body fat as a fraction of body weight (0.15 = 15%).
pub fn estimate_body_fat(gender: Gender, body_type: BodyType, age: u32) -> f64 {
    let base = base_body_fat(gender, body_type);
    if age > AGE_PENALTY_START_YEARS {
        base + (age - AGE_PENALTY_START_YEARS) as f64 * AGE_PENALTY_PER_YEAR
    } else {
        base
    }
}

/// Calculates Lean Body Mass from bodyweight and body fat fraction.
///
/// Formula:
/// ```text
/// LBM = bodyweight × (1 - body_fat)
/// ```
pub fn calculate_lbm(bodyweight_kg: f64, body_fat: f64) -> f64 {
    bodyweight_kg * (1.0 - body_fat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_bmi_calculation() {
        // 80kg at 180cm -> 24.69
        let bmi = calculate_bmi(80.0, 180.0);
        assert!(approx_eq(bmi, 24.69, 0.01), "BMI = {}", bmi);

        // 100kg at 200cm -> exactly 25
        assert!(approx_eq(calculate_bmi(100.0, 200.0), 25.0, 1e-9));
    }

    #[test]
    fn test_effective_body_type_keeps_declared_below_threshold() {
        for body_type in BodyType::all() {
            assert_eq!(effective_body_type(*body_type, 24.0), *body_type);
            assert_eq!(effective_body_type(*body_type, 30.0), *body_type);
        }
    }

    #[test]
    fn test_effective_body_type_overrides_above_threshold() {
        for body_type in BodyType::all() {
            assert_eq!(
                effective_body_type(*body_type, 30.01),
                BodyType::HighBodyFat
            );
        }
    }

    #[test]
    fn test_body_fat_table_without_age_penalty() {
        assert_eq!(estimate_body_fat(Gender::Male, BodyType::Lean, 25), 0.10);
        assert_eq!(estimate_body_fat(Gender::Male, BodyType::Normal, 30), 0.15);
        assert_eq!(
            estimate_body_fat(Gender::Male, BodyType::HighBodyFat, 18),
            0.30
        );
        assert_eq!(estimate_body_fat(Gender::Female, BodyType::Lean, 30), 0.18);
        assert_eq!(estimate_body_fat(Gender::Female, BodyType::Normal, 22), 0.25);
        assert_eq!(
            estimate_body_fat(Gender::Female, BodyType::HighBodyFat, 1),
            0.40
        );
    }

    #[test]
    fn test_body_fat_age_penalty() {
        // 45 years -> 15 years above 30 -> +0.015
        let bf = estimate_body_fat(Gender::Female, BodyType::Lean, 45);
        assert!(approx_eq(bf, 0.195, 1e-9), "BF = {}", bf);

        let bf = estimate_body_fat(Gender::Male, BodyType::Normal, 31);
        assert!(approx_eq(bf, 0.151, 1e-9), "BF = {}", bf);
    }

    #[test]
    fn test_lbm_calculation() {
        // 80kg at 15% body fat -> 68kg lean mass
        let lbm = calculate_lbm(80.0, 0.15);
        assert!(approx_eq(lbm, 68.0, 1e-9), "LBM = {}", lbm);
    }
}
