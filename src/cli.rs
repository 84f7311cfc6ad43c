use clap::{Parser, Subcommand};

/// FitPlanMaker: builds a weekly meal plan and workout list from your body metrics.
#[derive(Parser, Debug)]
#[command(name = "fit_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipes CSV file.
    #[arg(long, default_value = "data/recipes.csv")]
    pub recipes: String,

    /// Path to the exercises CSV file.
    #[arg(long, default_value = "data/exercises.csv")]
    pub exercises: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly plan.
    Plan {
        /// Read the profile from a JSON file instead of prompting.
        #[arg(short, long)]
        profile: Option<String>,

        /// Write the plan as JSON to this path.
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the narration summary after the plan.
        #[arg(long)]
        narrate: bool,
    },

    /// Display a previously saved plan.
    Show {
        /// Path to the plan JSON file.
        file: String,

        /// Print the narration summary after the plan.
        #[arg(long)]
        narrate: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: None,
            output: None,
            seed: None,
            narrate: false,
        }
    }
}
