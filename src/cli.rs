use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{DietPreference, Level};
use crate::planner::constants::{DEFAULT_PROCESSING_DELAY_MS, REPORT_FILE_NAME};

/// HealMeal — a condition-aware one-day meal plan with PDF export.
#[derive(Parser, Debug)]
#[command(name = "heal_meal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a profile, show its meal plan and export the PDF report.
    Plan(PlanArgs),

    /// List the selectable health conditions.
    Conditions,

    /// Show the fixed meal plan for a diet preference.
    Meals {
        /// Diet preference to show.
        #[arg(long, value_enum, default_value_t = DietPreference::Veg)]
        diet: DietPreference,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Read the profile from a JSON file instead of prompting.
    #[arg(long, conflicts_with = "name")]
    pub profile: Option<PathBuf>,

    /// Name; giving it switches to non-interactive mode.
    #[arg(long)]
    pub name: Option<String>,

    /// Age (1-100).
    #[arg(long, default_value_t = 30, requires = "name")]
    pub age: u8,

    /// Diet preference.
    #[arg(long, value_enum, default_value_t = DietPreference::Veg, requires = "name")]
    pub diet: DietPreference,

    /// Health condition (repeatable, at most 5).
    #[arg(long = "condition", requires = "name")]
    pub conditions: Vec<String>,

    /// Blood pressure level.
    #[arg(long, value_enum, default_value_t = Level::Normal, requires = "name")]
    pub bp: Level,

    /// Sugar level.
    #[arg(long, value_enum, default_value_t = Level::Normal, requires = "name")]
    pub sugar: Level,

    /// Where to write the PDF (file or directory).
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    pub output: PathBuf,

    /// Skip the PDF export.
    #[arg(long)]
    pub no_export: bool,

    /// Length of the processing pause in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PROCESSING_DELAY_MS)]
    pub delay_ms: u64,

    /// Print the computed outcome as JSON instead of the terminal view.
    #[arg(long)]
    pub json: bool,

    /// Plain terminal output without colours.
    #[arg(long)]
    pub no_color: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            profile: None,
            name: None,
            age: 30,
            diet: DietPreference::Veg,
            conditions: Vec::new(),
            bp: Level::Normal,
            sugar: Level::Normal,
            output: PathBuf::from(REPORT_FILE_NAME),
            no_export: false,
            delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            json: false,
            no_color: false,
        }
    }
}
