use std::time::Duration;

/// Conditions that force a modified plan. Every other condition is informational.
pub const RISK_CONDITIONS: [&str; 2] = ["Diabetes", "Heart Health Concern"];

/// Reason added when any risk condition is selected.
pub const RISK_CONDITION_REASON: &str = "Presence of health-related risk conditions";

// ─────────────────────────────────────────────────────────────────────────────
// Slot labels
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_LABEL: &str = "Breakfast (7:00–8:00 AM)";
pub const LUNCH_LABEL: &str = "Lunch (1:00–2:00 PM)";
pub const DINNER_LABEL: &str = "Dinner (7:30–8:30 PM)";

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

/// Artificial pause before the plan is shown.
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS);

pub const PROCESSING_MESSAGE: &str = "Generating your diet plan...";

pub const NORMAL_RANGE_MESSAGE: &str = "All health parameters are within normal range.";

pub const MODIFICATION_HEADING: &str = "Reason for modification:";

/// Width in cells of the longest chart bar.
pub const CHART_WIDTH: usize = 40;

// ─────────────────────────────────────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────────────────────────────────────

pub const REPORT_TITLE: &str = "HealMeal – One Day Diet Plan";

pub const REPORT_FILE_NAME: &str = "HealMeal_OneDay_Plan.pdf";

pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

pub const TABLE_HEADER: [&str; 2] = ["Meal Timing", "Diet Plan"];

pub const INSTRUCTIONS_HEADING: &str = "Additional Instructions";

pub const INSTRUCTIONS: [&str; 4] = [
    "Avoid oily and fried food",
    "Drink adequate water",
    "Prefer freshly cooked meals",
    "Limit sugar and salt intake",
];

pub const DISCLAIMER: &str =
    "This is a student Data Science project and does not replace professional nutritional advice.";
