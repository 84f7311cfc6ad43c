use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Plan, UserProfile};

/// Render a plan as pretty-printed JSON.
pub fn plan_to_json(plan: &Plan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Parse a plan from JSON.
pub fn plan_from_json(json: &str) -> Result<Plan> {
    Ok(serde_json::from_str(json)?)
}

/// Save a plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    fs::write(path, plan_to_json(plan)?)?;
    Ok(())
}

/// Load a plan previously written by [`save_plan`].
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    let content = fs::read_to_string(path)?;
    plan_from_json(&content)
}

/// Load a user profile from a JSON file and validate it.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}
