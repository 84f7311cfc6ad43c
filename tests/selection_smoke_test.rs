use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fit_plan_maker_rs::models::{
    Cuisine, DietPreference, DietType, Exercise, Goal, MealSlot, Recipe, Sex, UserProfile,
};
use fit_plan_maker_rs::planner::{
    MAX_WORKOUTS, PLAN_DAYS, generate_plan, select_day_meals, select_workouts,
};
use fit_plan_maker_rs::store::DataStore;

fn recipe(name: &str, cuisine: Cuisine, diet: DietType, slot: MealSlot, cal: u32) -> Recipe {
    Recipe {
        name: name.to_string(),
        cuisine,
        diet_type: diet,
        meal_slot: slot,
        calories: cal,
    }
}

fn exercise(name: &str, equipment: &str, minutes: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        equipment_required: equipment.to_string(),
        duration_minutes: minutes,
        difficulty: "medium".to_string(),
    }
}

/// A dataset with no Continental recipes at all.
fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe("Idli Sambar", Cuisine::SouthIndian, DietType::Veg, MealSlot::Breakfast, 250),
        recipe("Masala Dosa", Cuisine::SouthIndian, DietType::Veg, MealSlot::Breakfast, 350),
        recipe("Aloo Paratha", Cuisine::NorthIndian, DietType::Veg, MealSlot::Breakfast, 400),
        recipe("Egg Omelette", Cuisine::NorthIndian, DietType::NonVeg, MealSlot::Breakfast, 220),
        recipe("Curd Rice", Cuisine::SouthIndian, DietType::Veg, MealSlot::Lunch, 330),
        recipe("Chole Bhature", Cuisine::NorthIndian, DietType::Veg, MealSlot::Lunch, 600),
        recipe("Chicken Biryani", Cuisine::NorthIndian, DietType::NonVeg, MealSlot::Lunch, 650),
        recipe("Hakka Noodles", Cuisine::Chinese, DietType::Veg, MealSlot::Lunch, 450),
        recipe("Fish Curry", Cuisine::SouthIndian, DietType::NonVeg, MealSlot::Dinner, 480),
        recipe("Paneer Tikka", Cuisine::NorthIndian, DietType::Veg, MealSlot::Dinner, 420),
        recipe("Chilli Chicken", Cuisine::Chinese, DietType::NonVeg, MealSlot::Dinner, 520),
    ]
}

fn sample_exercises() -> Vec<Exercise> {
    vec![
        exercise("Push-ups", "none", 10),
        exercise("Squats", "none", 12),
        exercise("Plank", "none", 5),
        exercise("Dumbbell Curl", "dumbbell", 10),
        exercise("Barbell Row", "barbell", 15),
        exercise("Kettlebell Swing", "kettlebell", 10),
        exercise("Band Pull-apart", "resistance band", 8),
    ]
}

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Arjun".to_string(),
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

fn strings(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_total_calories_equals_item_sum() {
    let recipes = sample_recipes();
    let mut rng = StdRng::seed_from_u64(2024);

    for diet in [DietPreference::Vegetarian, DietPreference::NonVegetarian] {
        for _ in 0..50 {
            let day = select_day_meals(&recipes, &BTreeSet::new(), diet, &mut rng);
            let sum: u32 = day
                .breakfast
                .iter()
                .chain(&day.lunch)
                .chain(&day.dinner)
                .map(|r| r.calories)
                .sum();
            assert_eq!(day.total_calories, sum);
        }
    }
}

#[test]
fn test_absent_cuisine_falls_back_to_unfiltered_set() {
    let recipes = sample_recipes();
    let prefs: BTreeSet<Cuisine> = [Cuisine::Continental].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..20 {
        let day = select_day_meals(&recipes, &prefs, DietPreference::NonVegetarian, &mut rng);
        assert_eq!(day.breakfast.len(), 2);
        assert_eq!(day.lunch.len(), 2);
        assert_eq!(day.dinner.len(), 2);
    }
}

#[test]
fn test_slots_are_tagged_correctly() {
    let recipes = sample_recipes();
    let mut rng = StdRng::seed_from_u64(17);
    let day = select_day_meals(&recipes, &BTreeSet::new(), DietPreference::NonVegetarian, &mut rng);

    assert!(day.breakfast.iter().all(|r| r.meal_slot == MealSlot::Breakfast));
    assert!(day.lunch.iter().all(|r| r.meal_slot == MealSlot::Lunch));
    assert!(day.dinner.iter().all(|r| r.meal_slot == MealSlot::Dinner));
}

#[test]
fn test_none_equipment_considers_every_exercise() {
    let exercises = sample_exercises();
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = BTreeSet::new();

    for _ in 0..200 {
        let picked = select_workouts(&exercises, &strings(&["none"]), &BTreeSet::new(), &mut rng);
        assert!((1..=MAX_WORKOUTS).contains(&picked.len()));
        seen.extend(picked.into_iter().map(|e| e.name));
    }

    // Equipment-bound exercises show up too.
    assert_eq!(seen.len(), exercises.len());
}

#[test]
fn test_equipment_filter_without_none() {
    let exercises = sample_exercises();
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..50 {
        let picked =
            select_workouts(&exercises, &strings(&["dumbbell"]), &BTreeSet::new(), &mut rng);
        assert!(
            picked
                .iter()
                .all(|e| e.equipment_required == "none" || e.equipment_required == "dumbbell")
        );
    }
}

#[test]
fn test_generate_plan_has_seven_ordered_days() {
    let store = DataStore::new(sample_recipes(), sample_exercises());
    let mut rng = StdRng::seed_from_u64(77);
    let plan = generate_plan(&store, &sample_profile(), &mut rng);

    assert_eq!(plan.days.len(), PLAN_DAYS as usize);
    let tags: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
    assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(!plan.workouts.is_empty() && plan.workouts.len() <= MAX_WORKOUTS);
    assert_eq!(plan.bmr, 1657);
    assert_eq!(plan.calorie_target, 2269);
}

#[test]
fn test_generate_plan_with_minimal_dataset() {
    let recipes = vec![
        recipe("Toast", Cuisine::Continental, DietType::Veg, MealSlot::Breakfast, 200),
        recipe("Pasta", Cuisine::Continental, DietType::Veg, MealSlot::Lunch, 550),
        recipe("Soup", Cuisine::Continental, DietType::Veg, MealSlot::Dinner, 250),
    ];
    let store = DataStore::new(recipes, vec![exercise("Plank", "none", 5)]);
    let mut rng = StdRng::seed_from_u64(0);
    let plan = generate_plan(&store, &sample_profile(), &mut rng);

    assert_eq!(plan.days.len(), 7);
    for day in &plan.days {
        assert_eq!(day.meals.total_calories, 1000);
    }
    assert_eq!(plan.workouts.len(), 1);
}

#[test]
fn test_same_seed_gives_same_plan() {
    let store = DataStore::new(sample_recipes(), sample_exercises());
    let profile = sample_profile();

    let a = generate_plan(&store, &profile, &mut StdRng::seed_from_u64(31));
    let b = generate_plan(&store, &profile, &mut StdRng::seed_from_u64(31));
    assert_eq!(a, b);
}
