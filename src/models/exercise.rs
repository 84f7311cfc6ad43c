use serde::{Deserialize, Serialize};

use crate::planner::constants::NO_EQUIPMENT;

/// An exercise row from the exercises table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,

    /// Equipment needed, or "none" for bodyweight work.
    pub equipment_required: String,

    #[serde(alias = "duration_min")]
    pub duration_minutes: u32,

    pub difficulty: String,
}

impl Exercise {
    pub fn is_bodyweight(&self) -> bool {
        self.equipment_required == NO_EQUIPMENT
    }
}
