use serde::{Deserialize, Serialize};

use crate::models::{Exercise, MealSlot, Recipe};

/// One day's selected meals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMealSet {
    pub breakfast: Vec<Recipe>,
    pub lunch: Vec<Recipe>,
    pub dinner: Vec<Recipe>,

    /// Sum of calories over all selected items.
    pub total_calories: u32,
}

impl DayMealSet {
    /// Build a meal set, deriving `total_calories` from the items.
    pub fn new(breakfast: Vec<Recipe>, lunch: Vec<Recipe>, dinner: Vec<Recipe>) -> Self {
        let total_calories = breakfast
            .iter()
            .chain(&lunch)
            .chain(&dinner)
            .map(|r| r.calories)
            .sum();

        Self {
            breakfast,
            lunch,
            dinner,
            total_calories,
        }
    }

    pub fn slot(&self, slot: MealSlot) -> &[Recipe] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn item_count(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }
}

/// A meal set tagged with its position in the week (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,

    #[serde(flatten)]
    pub meals: DayMealSet,
}

/// A generated weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub bmr: i32,
    pub calorie_target: i32,
    pub days: Vec<DayPlan>,
    pub workouts: Vec<Exercise>,
}

impl Plan {
    /// Minutes for one session of every listed workout.
    pub fn total_workout_minutes(&self) -> u32 {
        self.workouts.iter().map(|w| w.duration_minutes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cuisine, DietType};

    fn recipe(name: &str, slot: MealSlot, calories: u32) -> Recipe {
        Recipe {
            name: name.to_string(),
            cuisine: Cuisine::Continental,
            diet_type: DietType::Veg,
            meal_slot: slot,
            calories,
        }
    }

    #[test]
    fn test_total_calories_derived_from_items() {
        let set = DayMealSet::new(
            vec![recipe("Oats", MealSlot::Breakfast, 300)],
            vec![
                recipe("Salad", MealSlot::Lunch, 250),
                recipe("Soup", MealSlot::Lunch, 180),
            ],
            vec![],
        );
        assert_eq!(set.total_calories, 730);
        assert_eq!(set.item_count(), 3);
        assert_eq!(set.slot(MealSlot::Lunch).len(), 2);
    }

    #[test]
    fn test_day_plan_serializes_flat() {
        let day = DayPlan {
            day: 3,
            meals: DayMealSet::new(vec![recipe("Oats", MealSlot::Breakfast, 300)], vec![], vec![]),
        };
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["day"], 3);
        assert_eq!(json["total_calories"], 300);
        assert_eq!(json["breakfast"][0]["name"], "Oats");
    }

    #[test]
    fn test_total_workout_minutes() {
        let workout = |name: &str, minutes: u32| Exercise {
            name: name.to_string(),
            equipment_required: "none".to_string(),
            duration_minutes: minutes,
            difficulty: "easy".to_string(),
        };
        let mut plan = Plan {
            name: "Asha".to_string(),
            bmr: 1400,
            calorie_target: 1700,
            days: vec![],
            workouts: vec![],
        };
        assert_eq!(plan.total_workout_minutes(), 0);

        plan.workouts = vec![workout("Plank", 5), workout("Squats", 12), workout("Burpees", 8)];
        assert_eq!(plan.total_workout_minutes(), 25);
    }
}
