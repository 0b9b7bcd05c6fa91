use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use strsim::jaro_winkler;

use crate::error::{HealError, Result};

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// The health condition vocabulary offered by the form, grouped by category.
pub static CONDITION_GROUPS: &[(&str, &[&str])] = &[
    (
        "Metabolic & Lifestyle",
        &[
            "Diabetes",
            "Pre-diabetes",
            "Cholesterol",
            "Obesity",
            "Underweight",
            "Weight Maintenance",
            "Sedentary Lifestyle",
        ],
    ),
    (
        "Deficiency related",
        &[
            "Anemia",
            "Iron Deficiency",
            "Vitamin D Deficiency",
            "Vitamin B12 Deficiency",
            "Calcium Deficiency",
        ],
    ),
    (
        "Digestive",
        &[
            "Acidity",
            "Constipation",
            "Indigestion",
            "Gastritis",
            "Acid Reflux (GERD)",
            "IBS",
            "Bloating",
        ],
    ),
    (
        "Cardiovascular",
        &[
            "Hypertension (High BP)",
            "Low Blood Pressure",
            "Heart Health Concern",
        ],
    ),
    ("Hormonal", &["Thyroid Disorder", "PCOS / PCOD"]),
    (
        "Immunity & Infection",
        &[
            "Weak Immunity",
            "Cold",
            "Cough",
            "Fever",
            "Post-Illness Recovery",
            "Post-COVID Recovery",
        ],
    ),
    (
        "Neurological & Mental",
        &[
            "Stress / Anxiety",
            "Poor Sleep (Insomnia)",
            "Migraine",
            "Headache",
            "Mental Fatigue",
        ],
    ),
    (
        "Musculoskeletal",
        &["Joint Pain / Arthritis", "Muscle Weakness"],
    ),
    (
        "Food tolerance",
        &["Lactose Intolerance", "Gluten Sensitivity"],
    ),
    (
        "General",
        &[
            "Poor Appetite",
            "Dehydration",
            "General Wellness",
            "Elderly Nutrition",
        ],
    ),
];

/// All condition names in form order.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    CONDITION_GROUPS
        .iter()
        .flat_map(|(_, names)| names.iter().copied())
}

/// A health condition drawn from the fixed vocabulary.
///
/// Only values present in [`CONDITION_GROUPS`] can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Condition(&'static str);

impl Condition {
    /// Look up a condition by exact name (case-insensitive).
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        vocabulary()
            .find(|c| c.to_lowercase() == wanted)
            .map(Condition)
    }

    /// Resolve typed input, suggesting the closest vocabulary entry on a miss.
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(condition) = Self::lookup(name) {
            return Ok(condition);
        }

        let message = match Self::suggest(name) {
            Some(best) => format!("'{}' (did you mean '{}'?)", name.trim(), best.name()),
            None => format!("'{}'", name.trim()),
        };
        Err(HealError::UnknownCondition(message))
    }

    /// Closest vocabulary entry by Jaro-Winkler similarity, if any is close enough.
    pub fn suggest(name: &str) -> Option<Self> {
        let input = name.trim().to_lowercase();
        vocabulary()
            .map(|c| (c, jaro_winkler(&c.to_lowercase(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| Condition(c))
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Condition::parse(&name).map_err(serde::de::Error::custom)
    }
}
