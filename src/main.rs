use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use fit_plan_maker_rs::cli::{Cli, Command};
use fit_plan_maker_rs::error::Result;
use fit_plan_maker_rs::interface::{
    collect_profile, display_plan, narration_summary, prompt_yes_no,
};
use fit_plan_maker_rs::models::Plan;
use fit_plan_maker_rs::planner::generate_plan;
use fit_plan_maker_rs::store::{DataStore, load_plan, load_profile, save_plan};

/// File name offered when saving a plan interactively.
const DEFAULT_PLAN_FILE: &str = "my_plan.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            profile,
            output,
            seed,
            narrate,
        } => {
            let store = DataStore::load(&cli.recipes, &cli.exercises)?;
            cmd_plan(&store, profile.as_deref(), output.as_deref(), seed, narrate)
        }
        Command::Show { file, narrate } => cmd_show(&file, narrate),
    }
}

/// Generate a plan from a profile file or interactive prompts.
fn cmd_plan(
    store: &DataStore,
    profile_path: Option<&str>,
    output: Option<&str>,
    seed: Option<u64>,
    narrate: bool,
) -> Result<()> {
    println!(
        "Loaded {} recipes and {} exercises",
        store.recipes().len(),
        store.exercises().len()
    );
    println!();

    let interactive = profile_path.is_none();
    let profile = match profile_path {
        Some(path) => load_profile(path)?,
        None => collect_profile(store)?,
    };

    let plan = match seed {
        Some(seed) => generate_plan(store, &profile, &mut StdRng::seed_from_u64(seed)),
        None => generate_plan(store, &profile, &mut rand::thread_rng()),
    };

    println!();
    println!("{}, your personalized workout & diet plan is ready!", profile.name);
    show_plan(&plan, narrate);

    match output {
        Some(path) => {
            save_plan(path, &plan)?;
            println!("Plan saved to {}.", path);
        }
        None if interactive => {
            let save = prompt_yes_no(&format!("Save plan to {}?", DEFAULT_PLAN_FILE), false)?;
            if save {
                save_plan(DEFAULT_PLAN_FILE, &plan)?;
                println!("Plan saved to {}.", DEFAULT_PLAN_FILE);
            }
        }
        None => {}
    }

    Ok(())
}

/// Display a saved plan.
fn cmd_show(file: &str, narrate: bool) -> Result<()> {
    let plan = load_plan(file)?;
    show_plan(&plan, narrate);
    Ok(())
}

fn show_plan(plan: &Plan, narrate: bool) {
    display_plan(plan);

    if narrate {
        println!("{}", narration_summary(plan));
        println!();
    }
}
