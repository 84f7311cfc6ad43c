/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex-specific constant added to the Mifflin-St Jeor sum.
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Calories subtracted (lose) or added (gain) to maintenance energy.
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity factors (TDEE multipliers)
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_FACTOR_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_FACTOR_LIGHT: f64 = 1.375;
pub const ACTIVITY_FACTOR_MODERATE: f64 = 1.55;
pub const ACTIVITY_FACTOR_ACTIVE: f64 = 1.725;

// ─────────────────────────────────────────────────────────────────────────────
// Plan shape
// ─────────────────────────────────────────────────────────────────────────────

/// Number of days in a generated plan.
pub const PLAN_DAYS: u32 = 7;

/// Maximum recipes picked per meal slot per day.
pub const ITEMS_PER_MEAL_SLOT: usize = 2;

/// Maximum exercises in the weekly workout list.
pub const MAX_WORKOUTS: usize = 4;

/// Equipment marker for bodyweight exercises. When a user lists it as
/// available, no equipment filter is applied at all.
pub const NO_EQUIPMENT: &str = "none";

// ─────────────────────────────────────────────────────────────────────────────
// Accepted input ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 100;

pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

pub const MIN_HEIGHT_CM: f64 = 120.0;
pub const MAX_HEIGHT_CM: f64 = 230.0;

/// Minimum Jaro-Winkler similarity for a fuzzy exercise-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
