pub mod exercise;
pub mod plan;
pub mod profile;
pub mod recipe;

pub use exercise::Exercise;
pub use plan::{DayMealSet, DayPlan, Plan};
pub use profile::{ActivityLevel, DietPreference, Goal, Sex, UserProfile};
pub use recipe::{Cuisine, DietType, MealSlot, Recipe};
