pub mod condition;
pub mod meal;
pub mod plan;
pub mod profile;

pub use condition::{CONDITION_GROUPS, Condition, vocabulary};
pub use meal::{DailyPlan, MealEntry, MealSlot, SlotKind};
pub use plan::{ClassificationResult, PlanLabel};
pub use profile::{
    DietPreference, Level, MAX_AGE, MAX_CONDITIONS, MIN_AGE, UserProfile, dedup_conditions,
};
