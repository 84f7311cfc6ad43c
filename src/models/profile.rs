use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::Cuisine;
use crate::planner::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(PlanError::unknown("sex", s)),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = PlanError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Weight goal driving the calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(PlanError::unknown("goal", s)),
        }
    }
}

impl TryFrom<String> for Goal {
    type Error = PlanError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Gain => write!(f, "gain"),
        }
    }
}

/// Diet preference. `NonVegetarian` admits vegetarian recipes as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DietPreference {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl FromStr for DietPreference {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" | "veg" => Ok(DietPreference::Vegetarian),
            "non-vegetarian" | "nonvegetarian" | "non-veg" => Ok(DietPreference::NonVegetarian),
            _ => Err(PlanError::unknown("diet preference", s)),
        }
    }
}

impl TryFrom<String> for DietPreference {
    type Error = PlanError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietPreference::Vegetarian => write!(f, "Vegetarian"),
            DietPreference::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}

/// Lifestyle activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_FACTOR_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_FACTOR_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_FACTOR_MODERATE,
            ActivityLevel::Active => ACTIVITY_FACTOR_ACTIVE,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            _ => Err(PlanError::unknown("activity level", s)),
        }
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = PlanError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
        }
    }
}

/// Body metrics and preferences for one plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_factor: f64,
    pub goal: Goal,

    #[serde(default)]
    pub cuisine_preferences: BTreeSet<Cuisine>,

    #[serde(default)]
    pub equipment_available: BTreeSet<String>,

    #[serde(default)]
    pub preferred_exercises: BTreeSet<String>,

    pub diet_preference: DietPreference,
}

impl UserProfile {
    /// Check required fields and accepted ranges.
    ///
    /// Runs at the input boundary; the planner assumes a validated profile.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlanError::InvalidInput("Name is required".to_string()));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(PlanError::InvalidInput(format!(
                "Age must be between {} and {}",
                MIN_AGE, MAX_AGE
            )));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(PlanError::InvalidInput(format!(
                "Weight must be between {} and {} kg",
                MIN_WEIGHT_KG, MAX_WEIGHT_KG
            )));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(PlanError::InvalidInput(format!(
                "Height must be between {} and {} cm",
                MIN_HEIGHT_CM, MAX_HEIGHT_CM
            )));
        }
        if !(ACTIVITY_FACTOR_SEDENTARY..=ACTIVITY_FACTOR_ACTIVE).contains(&self.activity_factor) {
            return Err(PlanError::InvalidInput(format!(
                "Activity factor must be between {} and {}",
                ACTIVITY_FACTOR_SEDENTARY, ACTIVITY_FACTOR_ACTIVE
            )));
        }
        Ok(())
    }
}
