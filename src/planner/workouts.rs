use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::Exercise;
use crate::planner::constants::{MAX_WORKOUTS, NO_EQUIPMENT};

/// Exercises doable with the listed equipment.
///
/// Listing "none" lifts the equipment constraint entirely. Otherwise an
/// exercise passes if its equipment is listed or it needs none.
pub fn filter_by_equipment<'a>(
    exercises: &'a [Exercise],
    equipment_available: &BTreeSet<String>,
) -> Vec<&'a Exercise> {
    if equipment_available.contains(NO_EQUIPMENT) {
        return exercises.iter().collect();
    }

    exercises
        .iter()
        .filter(|e| e.is_bodyweight() || equipment_available.contains(&e.equipment_required))
        .collect()
}

/// Restrict to the named exercises when any are preferred.
pub fn filter_by_preference<'a>(
    exercises: Vec<&'a Exercise>,
    preferred_exercises: &BTreeSet<String>,
) -> Vec<&'a Exercise> {
    if preferred_exercises.is_empty() {
        return exercises;
    }

    exercises
        .into_iter()
        .filter(|e| preferred_exercises.contains(&e.name))
        .collect()
}

/// Pick the week's workouts.
pub fn select_workouts<R: Rng + ?Sized>(
    exercises: &[Exercise],
    equipment_available: &BTreeSet<String>,
    preferred_exercises: &BTreeSet<String>,
    rng: &mut R,
) -> Vec<Exercise> {
    select_workouts_with(
        exercises,
        equipment_available,
        preferred_exercises,
        MAX_WORKOUTS,
        rng,
    )
}

/// Pick up to `max_workouts` distinct exercises.
///
/// If the filters leave nothing, the whole table is sampled instead.
pub fn select_workouts_with<R: Rng + ?Sized>(
    exercises: &[Exercise],
    equipment_available: &BTreeSet<String>,
    preferred_exercises: &BTreeSet<String>,
    max_workouts: usize,
    rng: &mut R,
) -> Vec<Exercise> {
    let mut pool = filter_by_preference(
        filter_by_equipment(exercises, equipment_available),
        preferred_exercises,
    );

    if pool.is_empty() {
        debug!(
            ?equipment_available,
            ?preferred_exercises,
            "no exercise matches equipment and preferences, using the full table"
        );
        pool = exercises.iter().collect();
    }

    pool.choose_multiple(rng, max_workouts)
        .map(|e| (*e).clone())
        .collect()
}
