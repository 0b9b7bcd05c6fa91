use log::debug;

use crate::models::{DailyPlan, DietPreference, MealEntry, MealSlot, SlotKind};
use crate::planner::constants::{BREAKFAST_LABEL, DINNER_LABEL, LUNCH_LABEL};

static VEG_PLAN: DailyPlan = DailyPlan {
    diet: DietPreference::Veg,
    slots: &[
        MealSlot {
            kind: SlotKind::Breakfast,
            label: BREAKFAST_LABEL,
            entries: &[
                MealEntry::new("1 cup milk", 120, 12.0, 8.0, 5.0),
                MealEntry::new("Vegetable omelette", 180, 6.0, 10.0, 12.0),
                MealEntry::new("2 brown bread slices", 140, 24.0, 6.0, 2.0),
                MealEntry::new("3 dates", 70, 18.0, 1.0, 0.0),
            ],
        },
        MealSlot {
            kind: SlotKind::Lunch,
            label: LUNCH_LABEL,
            entries: &[
                MealEntry::new("1 cup rice", 200, 45.0, 4.0, 1.0),
                MealEntry::new("Dal", 220, 30.0, 12.0, 4.0),
                MealEntry::new("Mixed vegetable curry", 150, 18.0, 5.0, 6.0),
                MealEntry::new("Salad", 50, 10.0, 2.0, 0.0),
            ],
        },
        MealSlot {
            kind: SlotKind::Dinner,
            label: DINNER_LABEL,
            entries: &[
                MealEntry::new("2 chapati", 180, 30.0, 6.0, 4.0),
                MealEntry::new("Vegetable curry", 200, 18.0, 6.0, 8.0),
                MealEntry::new("Curd", 90, 5.0, 5.0, 3.0),
            ],
        },
    ],
};

static NON_VEG_PLAN: DailyPlan = DailyPlan {
    diet: DietPreference::NonVeg,
    slots: &[
        MealSlot {
            kind: SlotKind::Breakfast,
            label: BREAKFAST_LABEL,
            entries: &[
                MealEntry::new("1 cup milk", 120, 12.0, 8.0, 5.0),
                MealEntry::new("Bread omelette", 220, 24.0, 12.0, 10.0),
                MealEntry::new("2 brown bread slices", 140, 24.0, 6.0, 2.0),
                MealEntry::new("3 dates", 70, 18.0, 1.0, 0.0),
            ],
        },
        MealSlot {
            kind: SlotKind::Lunch,
            label: LUNCH_LABEL,
            entries: &[
                MealEntry::new("1 cup rice", 200, 45.0, 4.0, 1.0),
                MealEntry::new("Chicken curry", 300, 8.0, 25.0, 18.0),
                MealEntry::new("Dal", 180, 28.0, 10.0, 3.0),
                MealEntry::new("Salad", 50, 10.0, 2.0, 0.0),
            ],
        },
        MealSlot {
            kind: SlotKind::Dinner,
            label: DINNER_LABEL,
            entries: &[
                MealEntry::new("2 chapati", 180, 30.0, 6.0, 4.0),
                MealEntry::new("Grilled fish / chicken", 250, 0.0, 28.0, 12.0),
                MealEntry::new("Vegetable curry", 150, 18.0, 5.0, 6.0),
            ],
        },
    ],
};

/// The fixed one-day plan for a diet preference.
pub fn get_meals(diet: DietPreference) -> &'static DailyPlan {
    debug!("serving {} meal plan", diet);
    match diet {
        DietPreference::Veg => &VEG_PLAN,
        DietPreference::NonVeg => &NON_VEG_PLAN,
    }
}
