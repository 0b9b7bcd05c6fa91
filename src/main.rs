use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use heal_meal_rs::cli::{Cli, Command, PlanArgs};
use heal_meal_rs::error::Result;
use heal_meal_rs::export::export_outcome;
use heal_meal_rs::interface::{
    ViewOptions, collect_profile, display_meals, display_outcome, prompt_yes_no, show_processing,
};
use heal_meal_rs::models::{CONDITION_GROUPS, Condition, UserProfile};
use heal_meal_rs::planner::{PlanOutcome, get_meals};
use heal_meal_rs::storage::{load_profile, write_document};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
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
        Command::Plan(args) => cmd_plan(&args),
        Command::Conditions => cmd_conditions(),
        Command::Meals { diet } => {
            display_meals(get_meals(diet), &ViewOptions::default());
            Ok(())
        }
    }
}

/// Build the profile from a file, from flags, or through the interactive form.
fn resolve_profile(args: &PlanArgs) -> Result<(UserProfile, bool)> {
    if let Some(path) = &args.profile {
        debug!("loading profile from {}", path.display());
        return Ok((load_profile(path)?, false));
    }

    if let Some(name) = &args.name {
        let conditions = args
            .conditions
            .iter()
            .map(|c| Condition::parse(c))
            .collect::<Result<Vec<_>>>()?;
        let profile = UserProfile::new(
            name.as_str(),
            args.age,
            args.diet,
            conditions,
            args.bp,
            args.sugar,
        )?;
        return Ok((profile, false));
    }

    Ok((collect_profile()?, true))
}

/// Classify, render and export one submission.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let (profile, interactive) = resolve_profile(args)?;
    info!(
        "plan requested: diet={} conditions={}",
        profile.diet_preference,
        profile.selected_conditions.len()
    );

    let options = ViewOptions {
        processing_delay: Duration::from_millis(args.delay_ms),
        color: !args.no_color,
    };

    if !args.json {
        show_processing(&options);
    }

    let outcome = PlanOutcome::evaluate(profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_outcome(&outcome, &options);
    }

    if args.no_export {
        return Ok(());
    }

    if interactive && !prompt_yes_no("Download meal plan PDF?", true)? {
        return Ok(());
    }

    let document = export_outcome(&outcome)?;
    let path = write_document(&args.output, &document)?;
    if !args.json {
        println!("Saved {} ({}).", path.display(), document.content_type);
    }

    Ok(())
}

/// Print the condition vocabulary by group.
fn cmd_conditions() -> Result<()> {
    for (group, names) in CONDITION_GROUPS {
        println!("{}:", group);
        for name in names.iter() {
            println!("  - {}", name);
        }
    }
    Ok(())
}
