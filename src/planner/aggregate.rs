use serde::Serialize;

use crate::models::{DailyPlan, MealSlot, SlotKind};

/// Nutrition sums for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotTotals {
    pub kind: SlotKind,
    pub label: &'static str,
    pub calories: u32,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl SlotTotals {
    fn from_slot(slot: &MealSlot) -> Self {
        let mut totals = Self {
            kind: slot.kind,
            label: slot.label,
            calories: 0,
            carbs: 0.0,
            protein: 0.0,
            fat: 0.0,
        };
        for entry in slot.entries {
            totals.calories += entry.calories;
            totals.carbs += entry.carbs;
            totals.protein += entry.protein;
            totals.fat += entry.fat;
        }
        totals
    }
}

/// Per-slot and whole-day sums, in slot order.
///
/// Always derived from a [`DailyPlan`] via [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateTotals {
    pub slots: Vec<SlotTotals>,
    pub total_calories: u32,
}

/// Labels and values for the calorie distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub values: Vec<u32>,
}

impl ChartData {
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// Share of each value in percent. All zeros when the total is zero.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|&v| {
                if total > 0 {
                    v as f64 / total as f64 * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl AggregateTotals {
    /// Slot calories keyed by label, in slot order.
    pub fn distribution(&self) -> ChartData {
        ChartData {
            labels: self.slots.iter().map(|s| s.label).collect(),
            values: self.slots.iter().map(|s| s.calories).collect(),
        }
    }
}

/// Sum nutrition per slot and across the day.
pub fn aggregate(plan: &DailyPlan) -> AggregateTotals {
    let slots: Vec<SlotTotals> = plan.slots.iter().map(SlotTotals::from_slot).collect();
    let total_calories = slots.iter().map(|s| s.calories).sum();
    AggregateTotals {
        slots,
        total_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietPreference, MealEntry};

    static ENTRIES: [MealEntry; 2] = [
        MealEntry::new("A", 100, 10.0, 1.5, 2.0),
        MealEntry::new("B", 50, 2.5, 1.0, 0.0),
    ];

    static SLOTS: [MealSlot; 2] = [
        MealSlot {
            kind: SlotKind::Breakfast,
            label: "Breakfast",
            entries: &ENTRIES,
        },
        MealSlot {
            kind: SlotKind::Lunch,
            label: "Lunch",
            entries: &[],
        },
    ];

    #[test]
    fn test_sums_and_order() {
        let plan = DailyPlan {
            diet: DietPreference::Veg,
            slots: &SLOTS,
        };
        let totals = aggregate(&plan);
        assert_eq!(totals.total_calories, 150);
        assert_eq!(totals.slots[0].calories, 150);
        assert_eq!(totals.slots[1].calories, 0);
        assert!((totals.slots[0].carbs - 12.5).abs() < 1e-9);
        assert!((totals.slots[0].protein - 2.5).abs() < 1e-9);

        let chart = totals.distribution();
        assert_eq!(chart.labels, vec!["Breakfast", "Lunch"]);
        assert_eq!(chart.values, vec![150, 0]);
        assert_eq!(chart.percentages(), vec![100.0, 0.0]);
    }

    #[test]
    fn test_empty_chart_percentages() {
        let chart = ChartData {
            labels: vec!["X"],
            values: vec![0],
        };
        assert_eq!(chart.percentages(), vec![0.0]);
    }
}
