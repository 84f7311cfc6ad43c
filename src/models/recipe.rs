use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Cuisine a recipe originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Cuisine {
    SouthIndian,
    NorthIndian,
    Chinese,
    Continental,
}

impl Cuisine {
    pub const ALL: [Cuisine; 4] = [
        Cuisine::SouthIndian,
        Cuisine::NorthIndian,
        Cuisine::Chinese,
        Cuisine::Continental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::SouthIndian => "SouthIndian",
            Cuisine::NorthIndian => "NorthIndian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Continental => "Continental",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = PlanError;

    /// Case-insensitive; spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == squashed)
            .ok_or_else(|| PlanError::unknown("cuisine", s))
    }
}

impl TryFrom<String> for Cuisine {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Whether a recipe is vegetarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl FromStr for DietType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Ok(DietType::Veg),
            "non-veg" | "nonveg" | "non veg" | "non-vegetarian" => Ok(DietType::NonVeg),
            _ => Err(PlanError::unknown("diet type", s)),
        }
    }
}

impl TryFrom<String> for DietType {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Meal a recipe is served at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "Breakfast"),
            MealSlot::Lunch => write!(f, "Lunch"),
            MealSlot::Dinner => write!(f, "Dinner"),
        }
    }
}

/// A recipe row from the recipes table.
///
/// The aliases accept the column names used by the legacy dataset export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    pub cuisine: Cuisine,

    #[serde(alias = "type_of_food")]
    pub diet_type: DietType,

    #[serde(alias = "type")]
    pub meal_slot: MealSlot,

    #[serde(alias = "cal")]
    pub calories: u32,
}

impl Recipe {
    pub fn is_veg(&self) -> bool {
        self.diet_type == DietType::Veg
    }
}
