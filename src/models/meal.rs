use serde::Serialize;

use crate::models::DietPreference;

/// A single dish with its nutrition per serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealEntry {
    pub name: &'static str,

    pub calories: u32,

    #[serde(rename = "carbs_g")]
    pub carbs: f64,

    #[serde(rename = "protein_g")]
    pub protein: f64,

    #[serde(rename = "fat_g")]
    pub fat: f64,
}

impl MealEntry {
    pub const fn new(
        name: &'static str,
        calories: u32,
        carbs: f64,
        protein: f64,
        fat: f64,
    ) -> Self {
        Self {
            name,
            calories,
            carbs,
            protein,
            fat,
        }
    }
}

/// Meal period. Declaration order is the order slots are served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SlotKind {
    Breakfast,
    Lunch,
    Dinner,
}

/// A meal period with its time window and ordered dishes.
#[derive(Debug, PartialEq, Serialize)]
pub struct MealSlot {
    pub kind: SlotKind,

    /// Display label including the time window, e.g. `Breakfast (7:00–8:00 AM)`.
    pub label: &'static str,

    pub entries: &'static [MealEntry],
}

impl MealSlot {
    /// First word of the label (`Breakfast`, `Lunch`, `Dinner`).
    pub fn short_name(&self) -> &'static str {
        self.label.split_whitespace().next().unwrap_or(self.label)
    }

    /// Entry names joined with ", " in serving order.
    pub fn joined_names(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One day of meals for a diet preference.
#[derive(Debug, PartialEq, Serialize)]
pub struct DailyPlan {
    pub diet: DietPreference,
    pub slots: &'static [MealSlot],
}

impl DailyPlan {
    /// Find a slot by its full label.
    pub fn slot(&self, label: &str) -> Option<&MealSlot> {
        self.slots.iter().find(|s| s.label == label)
    }

    /// Slot labels in serving order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.slots.iter().map(|s| s.label).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: [MealEntry; 2] = [
        MealEntry::new("Toast", 100, 20.0, 3.0, 1.0),
        MealEntry::new("Tea", 30, 5.0, 1.0, 1.0),
    ];

    static SLOTS: [MealSlot; 1] = [MealSlot {
        kind: SlotKind::Breakfast,
        label: "Breakfast (7:00–8:00 AM)",
        entries: &ENTRIES,
    }];

    #[test]
    fn test_short_name() {
        assert_eq!(SLOTS[0].short_name(), "Breakfast");
    }

    #[test]
    fn test_joined_names() {
        assert_eq!(SLOTS[0].joined_names(), "Toast, Tea");
    }

    #[test]
    fn test_slot_lookup() {
        let plan = DailyPlan {
            diet: DietPreference::Veg,
            slots: &SLOTS,
        };
        assert!(plan.slot("Breakfast (7:00–8:00 AM)").is_some());
        assert!(plan.slot("Breakfast").is_none());
        assert_eq!(plan.slots[0].kind, SlotKind::Breakfast);
        assert_eq!(plan.labels(), vec!["Breakfast (7:00–8:00 AM)"]);
    }
}
