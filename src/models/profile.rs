use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HealError, Result};
use crate::models::Condition;

/// Accepted age range, inclusive.
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 100;

/// Maximum number of health conditions per submission.
pub const MAX_CONDITIONS: usize = 5;

/// Dietary preference; selects which static meal plan is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum DietPreference {
    Veg,
    #[serde(rename = "Non-Veg", alias = "NonVeg")]
    NonVeg,
}

impl DietPreference {
    pub const ALL: [DietPreference; 2] = [DietPreference::Veg, DietPreference::NonVeg];

    pub fn display_name(&self) -> &'static str {
        match self {
            DietPreference::Veg => "Veg",
            DietPreference::NonVeg => "Non-Veg",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Blood pressure or sugar reading bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Level {
    #[default]
    Normal,
    High,
    Low,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Normal, Level::High, Level::Low];

    pub fn is_normal(&self) -> bool {
        matches!(self, Level::Normal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Normal => "Normal",
            Level::High => "High",
            Level::Low => "Low",
        };
        f.write_str(name)
    }
}

/// One form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,

    pub age: u8,

    #[serde(rename = "diet")]
    pub diet_preference: DietPreference,

    #[serde(rename = "conditions", default, deserialize_with = "deserialize_conditions")]
    pub selected_conditions: Vec<Condition>,

    #[serde(rename = "bp", default)]
    pub blood_pressure: Level,

    #[serde(rename = "sugar", default)]
    pub sugar: Level,
}

impl UserProfile {
    /// Build a profile, deduplicating conditions and enforcing the form constraints.
    pub fn new(
        name: impl Into<String>,
        age: u8,
        diet_preference: DietPreference,
        conditions: impl IntoIterator<Item = Condition>,
        blood_pressure: Level,
        sugar: Level,
    ) -> Result<Self> {
        let profile = Self {
            name: name.into().trim().to_string(),
            age,
            diet_preference,
            selected_conditions: dedup_conditions(conditions),
            blood_pressure,
            sugar,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check age range and condition count.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(HealError::InvalidInput(format!(
                "Age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, self.age
            )));
        }

        if self.selected_conditions.len() > MAX_CONDITIONS {
            return Err(HealError::InvalidInput(format!(
                "At most {} health conditions may be selected, got {}",
                MAX_CONDITIONS,
                self.selected_conditions.len()
            )));
        }

        let mut seen = Vec::with_capacity(self.selected_conditions.len());
        for condition in &self.selected_conditions {
            if seen.contains(condition) {
                return Err(HealError::InvalidInput(format!(
                    "Health condition listed twice: {}",
                    condition
                )));
            }
            seen.push(*condition);
        }

        Ok(())
    }
}

/// Drop repeated conditions, keeping the first occurrence of each in selection order.
pub fn dedup_conditions(conditions: impl IntoIterator<Item = Condition>) -> Vec<Condition> {
    let mut unique: Vec<Condition> = Vec::new();
    for condition in conditions {
        if !unique.contains(&condition) {
            unique.push(condition);
        }
    }
    unique
}

fn deserialize_conditions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Condition>, D::Error> {
    Vec::<Condition>::deserialize(deserializer).map(dedup_conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(name: &str) -> Condition {
        Condition::lookup(name).unwrap()
    }

    #[test]
    fn test_new_dedups_conditions() {
        let profile = UserProfile::new(
            " Asha ",
            30,
            DietPreference::Veg,
            [cond("IBS"), cond("Cold"), cond("IBS")],
            Level::Normal,
            Level::Normal,
        )
        .unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.selected_conditions, vec![cond("IBS"), cond("Cold")]);
    }

    #[test]
    fn test_age_bounds() {
        let build = |age| {
            UserProfile::new("A", age, DietPreference::Veg, [], Level::Normal, Level::Normal)
        };
        for age in [0, 101] {
            assert!(matches!(build(age), Err(HealError::InvalidInput(_))));
        }
        for age in [MIN_AGE, MAX_AGE] {
            assert!(build(age).is_ok());
        }
    }

    #[test]
    fn test_too_many_conditions() {
        let conditions = ["Cold", "Cough", "Fever", "IBS", "Migraine", "Headache"].map(cond);
        let result = UserProfile::new(
            "A",
            40,
            DietPreference::NonVeg,
            conditions,
            Level::Normal,
            Level::Normal,
        );
        assert!(matches!(result, Err(HealError::InvalidInput(_))));
    }

    #[test]
    fn test_profile_json_shape() {
        let json = r#"{
            "name": "Test",
            "age": 30,
            "diet": "Non-Veg",
            "conditions": ["Diabetes"],
            "bp": "High"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.diet_preference, DietPreference::NonVeg);
        assert_eq!(profile.selected_conditions, vec![cond("Diabetes")]);
        assert_eq!(profile.blood_pressure, Level::High);
        assert_eq!(profile.sugar, Level::Normal);
    }

    #[test]
    fn test_json_dedups_conditions_like_new() {
        let json = r#"{"name":"A","age":30,"diet": "Veg", "conditions": ["IBS", "ibs", "Cold"]}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.selected_conditions, vec![cond("IBS"), cond("Cold")]);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_repeats_do_not_count_towards_the_limit() {
        let names = ["Cold", "Cough", "Fever", "IBS", "Migraine", "Cold"];
        let json = serde_json::json!({
            "name": "A",
            "age": 30,
            "diet": "Veg",
            "conditions": names,
        });
        let from_json: UserProfile = serde_json::from_value(json).unwrap();
        assert!(from_json.validate().is_ok());

        let from_new = UserProfile::new(
            "A",
            30,
            DietPreference::Veg,
            names.map(cond),
            Level::Normal,
            Level::Normal,
        )
        .unwrap();
        assert_eq!(from_json.selected_conditions, from_new.selected_conditions);
        assert_eq!(from_new.selected_conditions.len(), MAX_CONDITIONS);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DietPreference::NonVeg.to_string(), "Non-Veg");
        assert_eq!(Level::Low.to_string(), "Low");
    }
}
