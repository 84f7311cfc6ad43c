use std::collections::BTreeSet;
use std::str::FromStr;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Cuisine, DietPreference, Goal, Sex, UserProfile};
use crate::planner::constants::*;
use crate::store::DataStore;

/// Prompt for the user's name. Empty names are rejected.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter your name")
        .interact_text()?;

    let name = input.trim();
    if name.is_empty() {
        return Err(PlanError::InvalidInput("Please enter your name".to_string()));
    }
    Ok(name.to_string())
}

/// Prompt for a number within an inclusive range.
fn prompt_in_range<T>(prompt: &str, default: T, min: T, max: T) -> Result<T>
where
    T: FromStr + PartialOrd + ToString + Copy,
{
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, min.to_string(), max.to_string()))
        .default(default.to_string())
        .interact_text()?;

    let value: T = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value < min || value > max {
        return Err(PlanError::InvalidInput(format!(
            "{} must be between {} and {}",
            prompt,
            min.to_string(),
            max.to_string()
        )));
    }

    Ok(value)
}

pub fn prompt_age() -> Result<u32> {
    prompt_in_range("Age", 22, MIN_AGE, MAX_AGE)
}

pub fn prompt_weight() -> Result<f64> {
    prompt_in_range("Weight (kg)", 70.0, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

pub fn prompt_height() -> Result<f64> {
    prompt_in_range("Height (cm)", 170.0, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Single choice from a fixed list of options.
fn prompt_choice<T: ToString + Copy>(prompt: &str, options: &[T], default: usize) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[selection])
}

pub fn prompt_sex() -> Result<Sex> {
    prompt_choice("Sex", &[Sex::Male, Sex::Female], 0)
}

pub fn prompt_goal() -> Result<Goal> {
    prompt_choice("Fitness goal", &Goal::ALL, 0)
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    prompt_choice("Activity level", &ActivityLevel::ALL, 0)
}

pub fn prompt_diet_preference() -> Result<DietPreference> {
    prompt_choice(
        "Diet preference",
        &[DietPreference::Vegetarian, DietPreference::NonVegetarian],
        0,
    )
}

/// Optional cuisine preferences. Selecting none means any cuisine.
pub fn prompt_cuisines() -> Result<BTreeSet<Cuisine>> {
    let labels: Vec<&str> = Cuisine::ALL.iter().map(|c| c.as_str()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Cuisine preference (optional, space to toggle)")
        .items(&labels)
        .interact()?;
    Ok(picked.into_iter().map(|i| Cuisine::ALL[i]).collect())
}

/// Equipment the user has on hand, offered from the exercise table.
pub fn prompt_equipment(options: &[&str]) -> Result<BTreeSet<String>> {
    let picked = MultiSelect::new()
        .with_prompt("Available equipment (space to toggle)")
        .items(options)
        .interact()?;
    Ok(picked.into_iter().map(|i| options[i].to_string()).collect())
}

/// Prompt for preferred exercises with fuzzy matching against known names.
pub fn prompt_preferred_exercises(known: &[&str]) -> Result<BTreeSet<String>> {
    let mut preferred = BTreeSet::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a preferred exercise (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(name) = find_exact(known, input) {
            preferred.insert(name.to_string());
            println!("Added: {}", name);
            continue;
        }

        let candidates = fuzzy_candidates(known, input);

        if candidates.is_empty() {
            println!("No matching exercise found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                preferred.insert(name.to_string());
                println!("Added: {}", name);
            }
        } else {
            let mut options: Vec<&str> = candidates.into_iter().take(5).collect();
            let shown = options.len();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if selection < shown {
                preferred.insert(options[selection].to_string());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(preferred)
}

/// Case-insensitive exact match.
pub fn find_exact<'a>(known: &[&'a str], input: &str) -> Option<&'a str> {
    let needle = input.to_lowercase();
    known.iter().copied().find(|n| n.to_lowercase() == needle)
}

/// Names scoring above the fuzzy threshold, best first.
pub fn fuzzy_candidates<'a>(known: &[&'a str], input: &str) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    let mut scored: Vec<(&str, f64)> = known
        .iter()
        .map(|n| (*n, jaro_winkler(&n.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(n, _)| n).collect()
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile interactively.
pub fn collect_profile(store: &DataStore) -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let weight_kg = prompt_weight()?;
    let height_cm = prompt_height()?;
    let sex = prompt_sex()?;
    let goal = prompt_goal()?;
    let activity = prompt_activity()?;
    let diet_preference = prompt_diet_preference()?;
    let cuisine_preferences = prompt_cuisines()?;
    let equipment_available = prompt_equipment(&store.equipment_options())?;
    let preferred_exercises = prompt_preferred_exercises(&store.exercise_names())?;

    let profile = UserProfile {
        name,
        age,
        sex,
        weight_kg,
        height_cm,
        activity_factor: activity.factor(),
        goal,
        cuisine_preferences,
        equipment_available,
        preferred_exercises,
        diet_preference,
    };
    profile.validate()?;
    Ok(profile)
}
