pub mod assemble;
pub mod calculations;
pub mod constants;
pub mod meals;
pub mod workouts;

pub use assemble::{generate_plan, generate_plan_with, PlannerConfig};
pub use calculations::{
    calorie_target_with_adjustment, compute_bmr, compute_calorie_target, compute_tdee,
    goal_adjustment,
};
pub use constants::*;
pub use meals::{filter_by_cuisine, filter_by_diet, select_day_meals, select_day_meals_with};
pub use workouts::{
    filter_by_equipment, filter_by_preference, select_workouts, select_workouts_with,
};
