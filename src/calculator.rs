//! Daily calorie target and macronutrient split from a biometric profile.
//!
//! The pipeline runs in a fixed order, since later steps depend on the
//! effective body type and effective goal resolved by earlier ones:
//! 1. Body composition (BMI, effective body type, body fat, lean mass)
//! 2. BMR, with the formula chosen from the classification
//! 3. TDEE from the activity multiplier
//! 4. Goal resolution
//! 5. Target calories with a per-gender safety floor
//! 6. Protein, fat and carbohydrate allocation

use serde::Serialize;

use crate::body_composition::{
    calculate_bmi, calculate_lbm, effective_body_type, estimate_body_fat,
};
use crate::domain::{BodyType, Gender, Goal, MacroPlan, Profile};
use crate::macronutrients::{allocate, fat_grams, protein_grams, protein_multiplier};
use crate::tdee::{BmrFormula, BmrInputs, activity_multiplier, calculate_bmr, calculate_tdee};

/// Minimum daily calories for men (kcal).
pub const MIN_CALORIES_MALE: u32 = 1500;

/// Minimum daily calories for women (kcal).
pub const MIN_CALORIES_FEMALE: u32 = 1200;

/// Fraction of TDEE eaten when losing weight.
const LOSE_FACTOR: f64 = 0.80;

/// Surplus over TDEE when gaining weight (kcal).
const GAIN_SURPLUS: f64 = 300.0;

/// Every intermediate value of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalBreakdown {
    pub bmi: f64,
    pub declared_body_type: BodyType,
    pub effective_body_type: BodyType,
    /// Estimated body fat as a fraction of weight.
    pub body_fat: f64,
    pub lean_body_mass_kg: f64,
    pub bmr_formula: BmrFormula,
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub stated_goal: Goal,
    pub effective_goal: Goal,
    /// Target before the safety floor, truncated toward zero.
    pub raw_target_calories: i64,
    /// Target after the safety floor, before macro allocation.
    pub target_calories: u32,
    pub plan: MacroPlan,
}

/// Resolves the goal actually planned for.
///
/// Rules are checked in order and the first match wins. A GAIN goal above
/// BMI 35 always becomes MAINTAIN, even for high body fat.
pub fn resolve_goal(stated: Goal, bmi: f64, effective_body_type: BodyType) -> Goal {
    let high_body_fat = effective_body_type == BodyType::HighBodyFat;
    match stated {
        _ if bmi > 40.0 => Goal::Lose,
        Goal::Gain if bmi > 35.0 => Goal::Maintain,
        _ if bmi > 35.0 && high_body_fat => Goal::Lose,
        _ if bmi > 30.0 && high_body_fat => Goal::Lose,
        goal => goal,
    }
}

/// Target calories for a goal, truncated toward zero, before the floor.
pub fn raw_target_calories(tdee: f64, goal: Goal) -> i64 {
    match goal {
        Goal::Lose => (tdee * LOSE_FACTOR) as i64,
        Goal::Maintain => tdee as i64,
        Goal::Gain => (tdee + GAIN_SURPLUS) as i64,
    }
}

/// Minimum daily calories for a gender.
pub fn calorie_floor(gender: Gender) -> u32 {
    match gender {
        Gender::Male => MIN_CALORIES_MALE,
        Gender::Female => MIN_CALORIES_FEMALE,
    }
}

/// Raises a raw target to the gender's safety floor.
pub fn apply_safety_floor(raw_target: i64, gender: Gender) -> u32 {
    let floored = raw_target.max(i64::from(calorie_floor(gender)));
    u32::try_from(floored).unwrap_or(u32::MAX)
}

/// Runs the full pipeline and keeps every intermediate value.
///
/// `profile` must satisfy [`Profile::validate`]; a non-positive height makes
/// the BMI meaningless.
pub fn compute_breakdown(profile: &Profile) -> GoalBreakdown {
    // 1. Body composition
    let bmi = calculate_bmi(profile.weight, profile.height);
    let effective_type = effective_body_type(profile.body_type, bmi);
    if effective_type != profile.body_type {
        log::info!(
            "BMI {:.1} overrides declared body type {} -> {}",
            bmi,
            profile.body_type,
            effective_type
        );
    }
    let body_fat = estimate_body_fat(profile.gender, effective_type, profile.age);
    let lean_body_mass_kg = calculate_lbm(profile.weight, body_fat);

    // 2. BMR
    let bmr_formula = BmrFormula::select(effective_type, bmi);
    let bmr = calculate_bmr(
        bmr_formula,
        &BmrInputs {
            gender: profile.gender,
            age: profile.age,
            height_cm: profile.height,
            weight_kg: profile.weight,
            lean_body_mass_kg,
        },
    );

    // 3. TDEE
    let multiplier = activity_multiplier(profile.activity_level, bmi);
    let tdee = calculate_tdee(bmr, multiplier);

    // 4. Goal
    let effective_goal = resolve_goal(profile.goal, bmi, effective_type);
    if effective_goal != profile.goal {
        log::info!(
            "BMI {:.1} ({}) overrides goal {} -> {}",
            bmi,
            effective_type,
            profile.goal,
            effective_goal
        );
    }

    // 5. Target calories
    let raw_target = raw_target_calories(tdee, effective_goal);
    let target_calories = apply_safety_floor(raw_target, profile.gender);

    // 6. Macros
    let protein = protein_grams(
        lean_body_mass_kg,
        protein_multiplier(effective_type, effective_goal),
    );
    let fat = fat_grams(profile.weight);
    let plan = allocate(target_calories, protein, fat);

    log::debug!(
        "bmi={:.2} type={} bf={:.3} lbm={:.2} bmr={:.1} ({:?}) x{} tdee={:.1} goal={} target={} -> {}",
        bmi,
        effective_type,
        body_fat,
        lean_body_mass_kg,
        bmr,
        bmr_formula,
        multiplier,
        tdee,
        effective_goal,
        target_calories,
        plan
    );

    GoalBreakdown {
        bmi,
        declared_body_type: profile.body_type,
        effective_body_type: effective_type,
        body_fat,
        lean_body_mass_kg,
        bmr_formula,
        bmr,
        activity_multiplier: multiplier,
        tdee,
        stated_goal: profile.goal,
        effective_goal,
        raw_target_calories: raw_target,
        target_calories,
        plan,
    }
}

/// Computes the daily calorie target and macro split for a profile.
pub fn compute_goal(profile: &Profile) -> MacroPlan {
    compute_breakdown(profile).plan
}
