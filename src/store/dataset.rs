use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{PlanError, Result};
use crate::models::{Exercise, Recipe};
use crate::planner::constants::NO_EQUIPMENT;

/// Read-only recipe and exercise tables.
///
/// Loaded once at startup and handed to the planner by reference.
#[derive(Debug, Clone)]
pub struct DataStore {
    recipes: Vec<Recipe>,
    exercises: Vec<Exercise>,
}

impl DataStore {
    pub fn new(recipes: Vec<Recipe>, exercises: Vec<Exercise>) -> Self {
        Self { recipes, exercises }
    }

    /// Load both tables from CSV files.
    ///
    /// A missing file, a malformed row, or a table without rows fails the
    /// whole load.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        recipes_path: P,
        exercises_path: Q,
    ) -> Result<Self> {
        let recipes = load_recipes(recipes_path)?;
        let exercises = load_exercises(exercises_path)?;
        Ok(Self::new(recipes, exercises))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Distinct exercise names, sorted.
    pub fn exercise_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.exercises.iter().map(|e| e.name.as_str()).collect();
        names.into_iter().collect()
    }

    /// Distinct equipment across the exercise table, with "none" first.
    pub fn equipment_options(&self) -> Vec<&str> {
        let mut options = vec![NO_EQUIPMENT];
        let others: BTreeSet<&str> = self
            .exercises
            .iter()
            .map(|e| e.equipment_required.as_str())
            .filter(|eq| *eq != NO_EQUIPMENT)
            .collect();
        options.extend(others);
        options
    }
}

/// Load the recipes table.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    load_table(path.as_ref())
}

/// Load the exercises table.
pub fn load_exercises<P: AsRef<Path>>(path: P) -> Result<Vec<Exercise>> {
    load_table(path.as_ref())
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let label = path.display().to_string();
    let rows = read_table(file, &label)?;
    info!(path = %label, rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Parse a CSV table with headers. Cells are trimmed.
pub fn read_table<T: DeserializeOwned, R: Read>(reader: R, label: &str) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let rows = rdr.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;

    if rows.is_empty() {
        return Err(PlanError::EmptyDataset(label.to_string()));
    }

    Ok(rows)
}
