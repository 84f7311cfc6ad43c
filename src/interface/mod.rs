pub mod narration;
pub mod prompts;
pub mod render;

pub use narration::narration_summary;
pub use prompts::{
    collect_profile, prompt_activity, prompt_age, prompt_cuisines, prompt_diet_preference,
    prompt_equipment, prompt_goal, prompt_height, prompt_name, prompt_preferred_exercises,
    prompt_sex, prompt_weight, prompt_yes_no,
};
pub use render::{display_day, display_plan, display_workouts};
