use crate::models::{DayPlan, MealSlot, Plan};

/// Display a full plan: calorie target, daily meals and workouts.
pub fn display_plan(plan: &Plan) {
    println!();
    println!("=== Plan for {} ===", plan.name);
    println!();
    println!("Daily calorie target: {} kcal", plan.calorie_target);
    println!("BMR (base metabolic rate): {} kcal/day", plan.bmr);
    println!();

    println!("--- Weekly Meal Plan ---");
    for day in &plan.days {
        display_day(day);
    }

    display_workouts(plan);
}

/// Display one day's meals with per-item calories.
pub fn display_day(day: &DayPlan) {
    println!();
    println!("Day {}", day.day);

    for slot in MealSlot::ALL {
        let items = day.meals.slot(slot);
        if items.is_empty() {
            println!("  {}: (none)", slot);
            continue;
        }

        println!("  {}:", slot);
        for item in items {
            println!("    - {} ({} kcal)", item.name, item.calories);
        }
    }

    println!("  Total calories: {} kcal", day.meals.total_calories);
}

/// Display the plan's workout list and session length.
pub fn display_workouts(plan: &Plan) {
    let workouts = &plan.workouts;
    println!();
    println!("--- Workout Plan ---");

    if workouts.is_empty() {
        println!("  (no exercises available)");
        println!();
        return;
    }

    let max_name_len = workouts.iter().map(|w| w.name.len()).max().unwrap_or(10);

    for workout in workouts {
        println!(
            "  - {:<width$} {:>3} min  {}",
            workout.name,
            workout.duration_minutes,
            workout.difficulty,
            width = max_name_len
        );
    }

    println!("  Total: {} min per session", plan.total_workout_minutes());
    println!();
}
