use serde::Serialize;

use crate::models::{ClassificationResult, DailyPlan, UserProfile};
use crate::planner::aggregate::{AggregateTotals, aggregate};
use crate::planner::classifier::classify_profile;
use crate::planner::dataset::get_meals;

/// Everything computed for one submission, shared by the terminal view and the report.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub profile: UserProfile,
    pub classification: ClassificationResult,
    pub plan: &'static DailyPlan,
    pub totals: AggregateTotals,
}

impl PlanOutcome {
    /// Run the classifier and dataset lookup, then aggregate the selected plan.
    pub fn evaluate(profile: UserProfile) -> Self {
        let classification = classify_profile(&profile);
        let plan = get_meals(profile.diet_preference);
        let totals = aggregate(plan);
        Self {
            profile,
            classification,
            plan,
            totals,
        }
    }
}
