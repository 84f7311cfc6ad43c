use rand::Rng;
use tracing::info;

use crate::models::{DayPlan, Plan, UserProfile};
use crate::planner::calculations::{calorie_target_with_adjustment, compute_bmr};
use crate::planner::constants::*;
use crate::planner::meals::select_day_meals_with;
use crate::planner::workouts::select_workouts_with;
use crate::store::DataStore;

/// Shape of a generated plan.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub days: u32,
    pub items_per_meal_slot: usize,
    pub max_workouts: usize,
    /// Calories removed for "lose" and added for "gain".
    pub goal_calorie_adjustment: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            days: PLAN_DAYS,
            items_per_meal_slot: ITEMS_PER_MEAL_SLOT,
            max_workouts: MAX_WORKOUTS,
            goal_calorie_adjustment: GOAL_CALORIE_ADJUSTMENT,
        }
    }
}

/// Generate a weekly plan with the default shape.
pub fn generate_plan<R: Rng + ?Sized>(
    store: &DataStore,
    profile: &UserProfile,
    rng: &mut R,
) -> Plan {
    generate_plan_with(store, profile, &PlannerConfig::default(), rng)
}

/// Generate a plan.
///
/// Each day is an independent draw; repeats across days are expected. The
/// workout list is drawn once for the whole plan.
pub fn generate_plan_with<R: Rng + ?Sized>(
    store: &DataStore,
    profile: &UserProfile,
    config: &PlannerConfig,
    rng: &mut R,
) -> Plan {
    let bmr = compute_bmr(profile.age, profile.sex, profile.weight_kg, profile.height_cm);
    let calorie_target = calorie_target_with_adjustment(
        bmr,
        profile.activity_factor,
        profile.goal,
        config.goal_calorie_adjustment,
    );

    info!(
        name = %profile.name,
        bmr,
        calorie_target,
        "generating {}-day plan",
        config.days
    );

    let mut days = Vec::with_capacity(config.days as usize);
    for day in 1..=config.days {
        let meals = select_day_meals_with(
            store.recipes(),
            &profile.cuisine_preferences,
            profile.diet_preference,
            config.items_per_meal_slot,
            rng,
        );
        days.push(DayPlan { day, meals });
    }

    let workouts = select_workouts_with(
        store.exercises(),
        &profile.equipment_available,
        &profile.preferred_exercises,
        config.max_workouts,
        rng,
    );

    Plan {
        name: profile.name.clone(),
        bmr: bmr.trunc() as i32,
        calorie_target,
        days,
        workouts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Cuisine, DietPreference, DietType, Exercise, Goal, MealSlot, Recipe, Sex,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn store() -> DataStore {
        let recipes = vec![
            Recipe {
                name: "Poha".to_string(),
                cuisine: Cuisine::NorthIndian,
                diet_type: DietType::Veg,
                meal_slot: MealSlot::Breakfast,
                calories: 250,
            },
            Recipe {
                name: "Rajma Chawal".to_string(),
                cuisine: Cuisine::NorthIndian,
                diet_type: DietType::Veg,
                meal_slot: MealSlot::Lunch,
                calories: 500,
            },
            Recipe {
                name: "Grilled Chicken".to_string(),
                cuisine: Cuisine::Continental,
                diet_type: DietType::NonVeg,
                meal_slot: MealSlot::Dinner,
                calories: 450,
            },
        ];
        let exercises = vec![Exercise {
            name: "Plank".to_string(),
            equipment_required: "none".to_string(),
            duration_minutes: 5,
            difficulty: "easy".to_string(),
        }];
        DataStore::new(recipes, exercises)
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Kiran".to_string(),
            age: 22,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
            activity_factor: 1.55,
            goal: Goal::Lose,
            cuisine_preferences: BTreeSet::new(),
            equipment_available: BTreeSet::new(),
            preferred_exercises: BTreeSet::new(),
            diet_preference: DietPreference::NonVegetarian,
        }
    }

    #[test]
    fn test_generate_plan_calorie_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let plan = generate_plan(&store(), &profile(), &mut rng);
        assert_eq!(plan.name, "Kiran");
        assert_eq!(plan.bmr, 1657);
        assert_eq!(plan.calorie_target, 2269);
    }

    #[test]
    fn test_generate_plan_with_custom_shape() {
        let config = PlannerConfig {
            days: 3,
            goal_calorie_adjustment: 500.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let plan = generate_plan_with(&store(), &profile(), &config, &mut rng);
        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.calorie_target, 2069);
    }
}
