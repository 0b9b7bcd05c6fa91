pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod storage;

pub use error::{HealError, Result};
pub use models::{ClassificationResult, DailyPlan, MealEntry, MealSlot, UserProfile};
pub use planner::PlanOutcome;
