mod dataset;
mod persistence;

pub use dataset::{DataStore, load_exercises, load_recipes, read_table};
pub use persistence::{load_plan, load_profile, plan_from_json, plan_to_json, save_plan};
