//! Domain types for the calorie and macronutrient calculation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Upper bound accepted for a profile's age, in years.
pub const MAX_AGE_YEARS: u32 = 150;

/// Upper bound accepted for a profile's height, in centimeters.
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Upper bound accepted for a profile's weight, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Energy density of protein (kcal per gram).
pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;

/// Energy density of fat (kcal per gram).
pub const KCAL_PER_GRAM_FAT: u32 = 9;

/// Energy density of carbohydrate (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: u32 = 4;

/// Normalizes user-supplied enum spellings: `lightly-active`, `Lightly Active`
/// and `LIGHTLY_ACTIVE` all become `LIGHTLY_ACTIVE`.
fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', ' '], "_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "MALE" | "M" => Ok(Gender::Male),
            "FEMALE" | "F" => Ok(Gender::Female),
            _ => Err(ProfileError::UnknownGender(s.to_string())),
        }
    }
}

/// Self-reported body type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    Lean,
    Normal,
    HighBodyFat,
}

impl BodyType {
    pub fn all() -> &'static [BodyType] {
        &[BodyType::Lean, BodyType::Normal, BodyType::HighBodyFat]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Lean => "LEAN",
            BodyType::Normal => "NORMAL",
            BodyType::HighBodyFat => "HIGH_BODY_FAT",
        }
    }
}

impl FromStr for BodyType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "LEAN" => Ok(BodyType::Lean),
            "NORMAL" => Ok(BodyType::Normal),
            "HIGH_BODY_FAT" => Ok(BodyType::HighBodyFat),
            _ => Err(ProfileError::UnknownBodyType(s.to_string())),
        }
    }
}

/// Habitual activity level, from desk-bound to hard daily training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "SEDENTARY",
            ActivityLevel::LightlyActive => "LIGHTLY_ACTIVE",
            ActivityLevel::ModeratelyActive => "MODERATELY_ACTIVE",
            ActivityLevel::VeryActive => "VERY_ACTIVE",
            ActivityLevel::ExtraActive => "EXTRA_ACTIVE",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "SEDENTARY" => Ok(ActivityLevel::Sedentary),
            "LIGHTLY_ACTIVE" => Ok(ActivityLevel::LightlyActive),
            "MODERATELY_ACTIVE" => Ok(ActivityLevel::ModeratelyActive),
            "VERY_ACTIVE" => Ok(ActivityLevel::VeryActive),
            "EXTRA_ACTIVE" => Ok(ActivityLevel::ExtraActive),
            _ => Err(ProfileError::UnknownActivityLevel(s.to_string())),
        }
    }
}

/// Weight goal, either as stated by the user or after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn all() -> &'static [Goal] {
        &[Goal::Lose, Goal::Maintain, Goal::Gain]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "LOSE",
            Goal::Maintain => "MAINTAIN",
            Goal::Gain => "GAIN",
        }
    }
}

impl FromStr for Goal {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "LOSE" => Ok(Goal::Lose),
            "MAINTAIN" => Ok(Goal::Maintain),
            "GAIN" => Ok(Goal::Gain),
            _ => Err(ProfileError::UnknownGoal(s.to_string())),
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(Gender, BodyType, ActivityLevel, Goal);

/// Biometric profile handed to the calculator.
///
/// Fields are public so callers can build one directly, but only a profile
/// that passes [`Profile::validate`] is a valid calculator input: the
/// calculator itself divides by height and does no checking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub body_type: BodyType,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    /// Creates a profile, rejecting values the calculator cannot handle.
    pub fn new(
        gender: Gender,
        age: u32,
        height: f64,
        weight: f64,
        body_type: BodyType,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            gender,
            age,
            height,
            weight,
            body_type,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the numeric preconditions of the calculation.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::NonPositiveAge);
        }
        if self.age > MAX_AGE_YEARS {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ProfileError::InvalidHeight(self.height));
        }
        if self.height > MAX_HEIGHT_CM {
            return Err(ProfileError::HeightOutOfRange(self.height));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ProfileError::InvalidWeight(self.weight));
        }
        if self.weight > MAX_WEIGHT_KG {
            return Err(ProfileError::WeightOutOfRange(self.weight));
        }
        Ok(())
    }
}

/// Daily calorie target with its macronutrient split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    pub calories: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
    pub carb_grams: u32,
}

impl MacroPlan {
    /// Energy carried by the three macronutrients, in kcal.
    ///
    /// Equals `calories` up to the 0-3 kcal dropped when carbohydrate grams
    /// are truncated.
    pub fn macro_calories(&self) -> u32 {
        self.protein_grams * KCAL_PER_GRAM_PROTEIN
            + self.fat_grams * KCAL_PER_GRAM_FAT
            + self.carb_grams * KCAL_PER_GRAM_CARBS
    }
}

impl std::fmt::Display for MacroPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} kcal (protein {} g, fat {} g, carbs {} g)",
            self.calories, self.protein_grams, self.fat_grams, self.carb_grams
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            gender: Gender::Male,
            age: 25,
            height: 180.0,
            weight: 80.0,
            body_type: BodyType::Normal,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_parse_enum_spellings() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "high-body-fat".parse::<BodyType>().unwrap(),
            BodyType::HighBodyFat
        );
        assert_eq!(
            "Lightly Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            "EXTRA_ACTIVE".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ExtraActive
        );
        assert_eq!("gain".parse::<Goal>().unwrap(), Goal::Gain);
    }

    #[test]
    fn test_parse_unknown_values() {
        assert_eq!(
            "other".parse::<Gender>(),
            Err(ProfileError::UnknownGender("other".into()))
        );
        assert!(matches!(
            "chubby".parse::<BodyType>(),
            Err(ProfileError::UnknownBodyType(_))
        ));
        assert!(matches!(
            "couch".parse::<ActivityLevel>(),
            Err(ProfileError::UnknownActivityLevel(_))
        ));
        assert!(matches!("cut".parse::<Goal>(), Err(ProfileError::UnknownGoal(_))));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for level in ActivityLevel::all() {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), *level);
        }
        for body_type in BodyType::all() {
            assert_eq!(body_type.to_string().parse::<BodyType>().unwrap(), *body_type);
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let p = sample_profile();

        assert_eq!(
            Profile { age: 0, ..p }.validate(),
            Err(ProfileError::NonPositiveAge)
        );
        assert_eq!(
            Profile { age: 151, ..p }.validate(),
            Err(ProfileError::AgeOutOfRange(151))
        );
        assert!(matches!(
            Profile { height: 0.0, ..p }.validate(),
            Err(ProfileError::InvalidHeight(_))
        ));
        assert!(matches!(
            Profile { height: f64::NAN, ..p }.validate(),
            Err(ProfileError::InvalidHeight(_))
        ));
        assert!(matches!(
            Profile { weight: -70.0, ..p }.validate(),
            Err(ProfileError::InvalidWeight(_))
        ));
        assert!(matches!(
            Profile { weight: f64::INFINITY, ..p }.validate(),
            Err(ProfileError::InvalidWeight(_))
        ));
        assert_eq!(
            Profile { height: 300.5, ..p }.validate(),
            Err(ProfileError::HeightOutOfRange(300.5))
        );
        assert_eq!(
            Profile { weight: 1e12, ..p }.validate(),
            Err(ProfileError::WeightOutOfRange(1e12))
        );
    }

    #[test]
    fn test_validate_accepts_upper_bounds() {
        let p = sample_profile();
        assert!(Profile { height: MAX_HEIGHT_CM, ..p }.validate().is_ok());
        assert!(Profile { weight: MAX_WEIGHT_KG, ..p }.validate().is_ok());
    }

    #[test]
    fn test_new_validates() {
        let result = Profile::new(
            Gender::Female,
            30,
            -160.0,
            60.0,
            BodyType::Lean,
            ActivityLevel::Sedentary,
            Goal::Lose,
        );
        assert!(matches!(result, Err(ProfileError::InvalidHeight(_))));
    }

    #[test]
    fn test_profile_json_uses_camel_case_and_constant_names() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(json["gender"], "MALE");
        assert_eq!(json["bodyType"], "NORMAL");
        assert_eq!(json["activityLevel"], "MODERATELY_ACTIVE");
        assert_eq!(json["goal"], "MAINTAIN");

        let parsed: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample_profile());
    }

    #[test]
    fn test_macro_calories() {
        let plan = MacroPlan {
            calories: 2850,
            protein_grams: 122,
            fat_grams: 72,
            carb_grams: 428,
        };
        assert_eq!(plan.macro_calories(), 122 * 4 + 72 * 9 + 428 * 4);
        assert_eq!(
            plan.to_string(),
            "2850 kcal (protein 122 g, fat 72 g, carbs 428 g)"
        );
    }
}
