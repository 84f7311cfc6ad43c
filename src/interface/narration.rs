use crate::models::Plan;

/// Spoken-style summary of a plan.
///
/// Mentions the calorie target, the number of workout sessions, and the
/// first breakfast and dinner of day 1. The meal sentence is left out when
/// day 1 lacks either.
pub fn narration_summary(plan: &Plan) -> String {
    let mut text = format!(
        "Hello {}! Based on your details, your daily calorie target is {} calories. \
         You will follow {} workout sessions per week. ",
        plan.name,
        plan.calorie_target,
        plan.workouts.len()
    );

    let first_day = plan.days.first();
    let breakfast = first_day.and_then(|d| d.meals.breakfast.first());
    let dinner = first_day.and_then(|d| d.meals.dinner.first());

    if let (Some(breakfast), Some(dinner)) = (breakfast, dinner) {
        text.push_str(&format!(
            "This plan includes healthy meals like {} for breakfast and {} for dinner. ",
            breakfast.name, dinner.name
        ));
    }

    text.push_str("Stay consistent, hydrated, and enjoy your fitness journey!");
    text
}
