use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{Cuisine, DayMealSet, DietPreference, MealSlot, Recipe};
use crate::planner::constants::ITEMS_PER_MEAL_SLOT;

/// Keep recipes from the preferred cuisines.
///
/// Cuisine is a soft preference: an empty preference set, or one that
/// matches nothing, leaves the full table in play.
pub fn filter_by_cuisine<'a>(
    recipes: &'a [Recipe],
    cuisine_preferences: &BTreeSet<Cuisine>,
) -> Vec<&'a Recipe> {
    if cuisine_preferences.is_empty() {
        return recipes.iter().collect();
    }

    let filtered: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| cuisine_preferences.contains(&r.cuisine))
        .collect();

    if filtered.is_empty() {
        debug!(
            ?cuisine_preferences,
            "no recipes match preferred cuisines, using all cuisines"
        );
        return recipes.iter().collect();
    }

    filtered
}

/// Apply the diet preference. Non-vegetarian keeps everything.
pub fn filter_by_diet<'a>(
    recipes: Vec<&'a Recipe>,
    diet_preference: DietPreference,
) -> Vec<&'a Recipe> {
    match diet_preference {
        DietPreference::Vegetarian => recipes.into_iter().filter(|r| r.is_veg()).collect(),
        DietPreference::NonVegetarian => recipes,
    }
}

/// Candidate pool for one slot, falling back to every recipe for that slot
/// when the filtered set has none.
fn slot_pool<'a>(
    filtered: &[&'a Recipe],
    all_recipes: &'a [Recipe],
    slot: MealSlot,
) -> Vec<&'a Recipe> {
    let pool: Vec<&Recipe> = filtered
        .iter()
        .copied()
        .filter(|r| r.meal_slot == slot)
        .collect();

    if !pool.is_empty() {
        return pool;
    }

    debug!(%slot, "filtered pool is empty, falling back to the full table");
    all_recipes.iter().filter(|r| r.meal_slot == slot).collect()
}

/// Sample up to `amount` distinct recipes uniformly at random.
fn sample<R: Rng + ?Sized>(pool: &[&Recipe], amount: usize, rng: &mut R) -> Vec<Recipe> {
    pool.choose_multiple(rng, amount)
        .map(|r| (*r).clone())
        .collect()
}

/// Select one day's breakfast, lunch and dinner.
pub fn select_day_meals<R: Rng + ?Sized>(
    recipes: &[Recipe],
    cuisine_preferences: &BTreeSet<Cuisine>,
    diet_preference: DietPreference,
    rng: &mut R,
) -> DayMealSet {
    select_day_meals_with(
        recipes,
        cuisine_preferences,
        diet_preference,
        ITEMS_PER_MEAL_SLOT,
        rng,
    )
}

/// Select one day's meals, picking up to `items_per_slot` recipes per slot.
///
/// A slot only ends up empty when the table has no recipe for it at all.
pub fn select_day_meals_with<R: Rng + ?Sized>(
    recipes: &[Recipe],
    cuisine_preferences: &BTreeSet<Cuisine>,
    diet_preference: DietPreference,
    items_per_slot: usize,
    rng: &mut R,
) -> DayMealSet {
    let by_cuisine = filter_by_cuisine(recipes, cuisine_preferences);
    let filtered = filter_by_diet(by_cuisine, diet_preference);

    let breakfast = sample(
        &slot_pool(&filtered, recipes, MealSlot::Breakfast),
        items_per_slot,
        rng,
    );
    let lunch = sample(
        &slot_pool(&filtered, recipes, MealSlot::Lunch),
        items_per_slot,
        rng,
    );
    let dinner = sample(
        &slot_pool(&filtered, recipes, MealSlot::Dinner),
        items_per_slot,
        rng,
    );

    DayMealSet::new(breakfast, lunch, dinner)
}
