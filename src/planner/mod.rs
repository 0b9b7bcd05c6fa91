pub mod aggregate;
pub mod classifier;
pub mod constants;
pub mod dataset;
pub mod outcome;

pub use aggregate::{AggregateTotals, ChartData, SlotTotals, aggregate};
pub use classifier::{classify, classify_profile, is_risk_condition};
pub use constants::*;
pub use dataset::get_meals;
pub use outcome::PlanOutcome;
