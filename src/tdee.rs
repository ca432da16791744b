//! BMR and TDEE (Total Daily Energy Expenditure) estimation.
//!
//! BMR comes from one of two formulas depending on body composition, and is
//! scaled by an activity multiplier that is capped at very high BMI.

use serde::Serialize;

use crate::domain::{ActivityLevel, BodyType, Gender};

// === Constants ===

/// BMI above which the weight/height/age formula replaces the lean-mass one.
pub const BMI_ALTERNATE_FORMULA: f64 = 28.0;

/// BMI above which the activity multiplier is capped.
pub const BMI_ACTIVITY_CAP: f64 = 35.0;

/// Largest activity multiplier allowed above `BMI_ACTIVITY_CAP`.
pub const MAX_ACTIVITY_MULTIPLIER_HIGH_BMI: f64 = 1.5;

/// Katch-McArdle intercept (kcal).
const KATCH_MCARDLE_BASE: f64 = 370.0;

/// Katch-McArdle slope (kcal per kg of lean mass).
const KATCH_MCARDLE_PER_KG_LBM: f64 = 21.6;

// === Data Structures ===

/// Formula used to estimate basal metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BmrFormula {
    /// Mifflin-St Jeor: weight, height, age and gender.
    MifflinStJeor,
    /// Katch-McArdle: lean body mass only.
    #[serde(rename = "KATCH_MCARDLE")]
    KatchMcArdle,
}

impl BmrFormula {
    /// Picks the formula for a resolved body type and BMI.
    ///
    /// Lean-mass estimates get noisy at higher adiposity, so high body fat or
    /// BMI above 28 switches to Mifflin-St Jeor.
    pub fn select(effective_body_type: BodyType, bmi: f64) -> Self {
        if effective_body_type == BodyType::HighBodyFat || bmi > BMI_ALTERNATE_FORMULA {
            BmrFormula::MifflinStJeor
        } else {
            BmrFormula::KatchMcArdle
        }
    }
}

/// Inputs shared by both BMR formulas.
#[derive(Debug, Clone, Copy)]
pub struct BmrInputs {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub lean_body_mass_kg: f64,
}

// === Main Calculation Functions ===

/// Mifflin-St Jeor BMR in kcal.
///
/// Formula:
/// ```text
/// BMR = 10 × weight + 6.25 × height - 5 × age + (5 male | -161 female)
/// ```
pub fn mifflin_st_jeor(gender: Gender, age: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Katch-McArdle BMR in kcal.
///
/// Formula:
/// ```text
/// BMR = 370 + 21.6 × LBM
/// ```
pub fn katch_mcardle(lean_body_mass_kg: f64) -> f64 {
    KATCH_MCARDLE_BASE + KATCH_MCARDLE_PER_KG_LBM * lean_body_mass_kg
}

/// Calculates BMR with the given formula.
pub fn calculate_bmr(formula: BmrFormula, inputs: &BmrInputs) -> f64 {
    match formula {
        BmrFormula::MifflinStJeor => {
            mifflin_st_jeor(inputs.gender, inputs.age, inputs.height_cm, inputs.weight_kg)
        }
        BmrFormula::KatchMcArdle => katch_mcardle(inputs.lean_body_mass_kg),
    }
}

/// Activity multiplier for a level, capped at 1.5 when BMI is above 35.
pub fn activity_multiplier(level: ActivityLevel, bmi: f64) -> f64 {
    let multiplier: f64 = match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    };

    if bmi > BMI_ACTIVITY_CAP {
        multiplier.min(MAX_ACTIVITY_MULTIPLIER_HIGH_BMI)
    } else {
        multiplier
    }
}

/// Scales BMR to total daily expenditure.
pub fn calculate_tdee(bmr: f64, multiplier: f64) -> f64 {
    bmr * multiplier
}

// === Unit Tests ===
