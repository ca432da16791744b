//! Error types for the macrogoal application.

use thiserror::Error;

/// Errors raised while turning raw input into a validated profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("age must be positive")]
    NonPositiveAge,

    #[error("age {0} is out of range (max {max})", max = crate::domain::MAX_AGE_YEARS)]
    AgeOutOfRange(u32),

    #[error("height must be a positive number of centimeters: {0}")]
    InvalidHeight(f64),

    #[error("height {0} cm is out of range (max {max})", max = crate::domain::MAX_HEIGHT_CM)]
    HeightOutOfRange(f64),

    #[error("weight must be a positive number of kilograms: {0}")]
    InvalidWeight(f64),

    #[error("weight {0} kg is out of range (max {max})", max = crate::domain::MAX_WEIGHT_KG)]
    WeightOutOfRange(f64),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("unknown body type: {0}")]
    UnknownBodyType(String),

    #[error("unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("unknown goal: {0}")]
    UnknownGoal(String),
}

impl ProfileError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::NonPositiveAge | ProfileError::AgeOutOfRange(_) => "age",
            ProfileError::InvalidHeight(_) | ProfileError::HeightOutOfRange(_) => "height",
            ProfileError::InvalidWeight(_) | ProfileError::WeightOutOfRange(_) => "weight",
            ProfileError::UnknownGender(_) => "gender",
            ProfileError::UnknownBodyType(_) => "bodyType",
            ProfileError::UnknownActivityLevel(_) => "activityLevel",
            ProfileError::UnknownGoal(_) => "goal",
        }
    }
}
