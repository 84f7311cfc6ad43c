use crate::models::{Goal, Sex};
use crate::planner::constants::*;

/// Base metabolic rate via the Mifflin-St Jeor equation.
///
/// Male: `10w + 6.25h - 5a + 5`; female: `10w + 6.25h - 5a - 161`.
pub fn compute_bmr(age: u32, sex: Sex, weight_kg: f64, height_cm: f64) -> f64 {
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * f64::from(age);

    match sex {
        Sex::Male => base + BMR_MALE_CONSTANT,
        Sex::Female => base + BMR_FEMALE_CONSTANT,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity factor.
#[inline]
pub fn compute_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Signed calorie adjustment applied for a goal.
pub fn goal_adjustment(goal: Goal, adjustment: f64) -> f64 {
    match goal {
        Goal::Lose => -adjustment,
        Goal::Maintain => 0.0,
        Goal::Gain => adjustment,
    }
}

/// Daily calorie target, truncated toward zero.
pub fn compute_calorie_target(bmr: f64, activity_factor: f64, goal: Goal) -> i32 {
    calorie_target_with_adjustment(bmr, activity_factor, goal, GOAL_CALORIE_ADJUSTMENT)
}

/// Calorie target with an explicit goal adjustment magnitude.
pub fn calorie_target_with_adjustment(
    bmr: f64,
    activity_factor: f64,
    goal: Goal,
    adjustment: f64,
) -> i32 {
    let tdee = compute_tdee(bmr, activity_factor);
    (tdee + goal_adjustment(goal, adjustment)).trunc() as i32
}
