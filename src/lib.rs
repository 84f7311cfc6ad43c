pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod store;

pub use error::{PlanError, Result};
pub use models::{DayMealSet, Exercise, Plan, Recipe, UserProfile};
