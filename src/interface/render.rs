use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::interface::ViewOptions;
use crate::models::{ClassificationResult, DailyPlan, PlanLabel};
use crate::planner::constants::{CHART_WIDTH, MODIFICATION_HEADING, NORMAL_RANGE_MESSAGE};
use crate::planner::{AggregateTotals, ChartData, PlanOutcome, aggregate};

/// Apply `style` only when colour is requested, so uncoloured output never carries escapes.
fn paint(text: &str, color: bool, style: impl FnOnce(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Decision banner: green when suggested, red with the reasons when modified.
pub fn render_banner(classification: &ClassificationResult, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Meal Plan Decision ===");
    let _ = writeln!(out);

    let title = classification.label.title();
    match classification.label {
        PlanLabel::Suggested => {
            let _ = writeln!(out, "{}", paint(title, color, |s| s.green().bold()));
            let _ = writeln!(out, "{}", NORMAL_RANGE_MESSAGE);
        }
        PlanLabel::Modified => {
            let _ = writeln!(out, "{}", paint(title, color, |s| s.red().bold()));
            let _ = writeln!(out, "{}", paint(MODIFICATION_HEADING, color, |s| s.bold()));
            for reason in &classification.reasons {
                let _ = writeln!(out, "  • {}", reason);
            }
        }
    }

    out
}

/// Itemized slots with per-entry nutrition and a calorie total per slot.
pub fn render_meal_slots(plan: &DailyPlan, totals: &AggregateTotals, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== One-Day Detailed Meal Plan ===");

    for (slot, slot_totals) in plan.slots.iter().zip(&totals.slots) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint(slot.label, color, |s| s.bold()));
        for entry in slot.entries {
            let _ = writeln!(
                out,
                "- {} → {} kcal (Carbs: {}g | Protein: {}g | Fat: {}g)",
                paint(entry.name, color, |s| s.bold()),
                entry.calories,
                entry.carbs,
                entry.protein,
                entry.fat
            );
        }
        let callout = format!(
            "Total {} Calories: {} kcal",
            slot.short_name(),
            slot_totals.calories
        );
        let _ = writeln!(out, "{}", paint(&callout, color, |s| s.cyan()));
    }

    out
}

/// Horizontal bar chart of the calorie distribution with one-decimal percentages.
pub fn render_chart(chart: &ChartData, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Calorie Distribution ===");
    let _ = writeln!(out);

    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for ((label, value), pct) in chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(chart.percentages())
    {
        let cells = (pct / 100.0 * width as f64).round() as usize;
        let padding = label_width - label.chars().count();
        let _ = writeln!(
            out,
            "{}{}  {:<width$}  {:>5.1}%  ({} kcal)",
            label,
            " ".repeat(padding),
            "█".repeat(cells),
            pct,
            value,
            width = width
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total daily calories: {} kcal", chart.total());
    out
}

/// Full terminal view of an outcome.
pub fn render_outcome(outcome: &PlanOutcome, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&render_banner(&outcome.classification, color));
    out.push('\n');
    out.push_str(&render_meal_slots(outcome.plan, &outcome.totals, color));
    out.push('\n');
    out.push_str(&render_chart(&outcome.totals.distribution(), CHART_WIDTH));
    out
}

/// Print the full view for an outcome.
pub fn display_outcome(outcome: &PlanOutcome, options: &ViewOptions) {
    println!();
    print!("{}", render_outcome(outcome, options.color));
    println!();
}

/// Print a diet's dataset with slot totals and chart, without a decision banner.
pub fn display_meals(plan: &DailyPlan, options: &ViewOptions) {
    let totals = aggregate(plan);
    println!();
    println!("Diet: {}", plan.diet);
    println!();
    print!("{}", render_meal_slots(plan, &totals, options.color));
    println!();
    print!("{}", render_chart(&totals.distribution(), CHART_WIDTH));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietPreference, Level};
    use crate::planner::{classify, get_meals};

    #[test]
    fn test_banner_suggested() {
        let banner = render_banner(&classify(Level::Normal, Level::Normal, &[]), false);
        assert_eq!(
            banner,
            format!(
                "=== Meal Plan Decision ===\n\nSuggested Meal Plan\n{}\n",
                NORMAL_RANGE_MESSAGE
            )
        );
    }

    #[test]
    fn test_banner_modified_lists_reasons() {
        let banner = render_banner(&classify(Level::High, Level::Normal, &[]), false);
        assert_eq!(
            banner,
            "=== Meal Plan Decision ===\n\nModified Meal Plan\nReason for modification:\n  \
             • Blood Pressure is High\n"
        );
    }

    #[test]
    fn test_meal_slots_callouts() {
        let plan = get_meals(DietPreference::Veg);
        let text = render_meal_slots(plan, &aggregate(plan), false);
        assert!(text.contains("Total Breakfast Calories: 510 kcal"));
        assert!(text.contains("Total Lunch Calories: 620 kcal"));
        assert!(text.contains("Total Dinner Calories: 470 kcal"));
        assert!(text.contains("- 1 cup rice → 200 kcal (Carbs: 45g | Protein: 4g | Fat: 1g)"));

        let breakfast = text.find("Breakfast (7:00–8:00 AM)").unwrap();
        let lunch = text.find("Lunch (1:00–2:00 PM)").unwrap();
        let dinner = text.find("Dinner (7:30–8:30 PM)").unwrap();
        assert!(breakfast < lunch && lunch < dinner);
    }

    #[test]
    fn test_uncoloured_output_has_no_escapes() {
        let profile = crate::models::UserProfile::new(
            "Test",
            30,
            DietPreference::NonVeg,
            [],
            Level::Low,
            Level::High,
        )
        .unwrap();
        let outcome = PlanOutcome::evaluate(profile);
        let first = render_outcome(&outcome, false);
        assert!(!first.contains('\x1b'));
        assert_eq!(first, render_outcome(&outcome, false));
    }

    #[test]
    fn test_chart_percentages() {
        let chart = ChartData {
            labels: vec!["A", "Bb"],
            values: vec![1, 3],
        };
        let text = render_chart(&chart, 8);
        assert!(text.contains(" 25.0%"));
        assert!(text.contains(" 75.0%"));
        assert!(text.contains("A   ██        "));
        assert!(text.contains("Total daily calories: 4 kcal"));
    }
}
