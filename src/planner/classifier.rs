use log::debug;

use crate::models::{ClassificationResult, Condition, Level, UserProfile};
use crate::planner::constants::{RISK_CONDITION_REASON, RISK_CONDITIONS};

/// Whether a condition is one of the risk conditions.
pub fn is_risk_condition(condition: &Condition) -> bool {
    RISK_CONDITIONS.contains(&condition.name())
}

/// Map health signals to a plan label and its reasons.
///
/// Reasons are always ordered blood pressure, sugar, risk conditions.
pub fn classify(bp: Level, sugar: Level, conditions: &[Condition]) -> ClassificationResult {
    let mut reasons = Vec::new();

    if !bp.is_normal() {
        reasons.push(format!("Blood Pressure is {}", bp));
    }
    if !sugar.is_normal() {
        reasons.push(format!("Sugar level is {}", sugar));
    }
    if conditions.iter().any(is_risk_condition) {
        reasons.push(RISK_CONDITION_REASON.to_string());
    }

    let result = ClassificationResult::from_reasons(reasons);
    debug!(
        "classified bp={} sugar={} conditions={} -> {}",
        bp,
        sugar,
        conditions.len(),
        result.label
    );
    result
}

/// Classify a submitted profile. Name, age and diet play no part.
pub fn classify_profile(profile: &UserProfile) -> ClassificationResult {
    classify(profile.blood_pressure, profile.sugar, &profile.selected_conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanLabel;

    fn cond(name: &str) -> Condition {
        Condition::lookup(name).unwrap()
    }

    #[test]
    fn test_all_normal_is_suggested() {
        let result = classify(Level::Normal, Level::Normal, &[]);
        assert_eq!(result.label, PlanLabel::Suggested);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_reason_order() {
        let result = classify(Level::Low, Level::High, &[cond("Heart Health Concern")]);
        assert_eq!(result.label, PlanLabel::Modified);
        assert_eq!(
            result.reasons,
            vec![
                "Blood Pressure is Low".to_string(),
                "Sugar level is High".to_string(),
                RISK_CONDITION_REASON.to_string(),
            ]
        );
    }

    #[test]
    fn test_sugar_only() {
        let result = classify(Level::Normal, Level::Low, &[]);
        assert_eq!(result.reasons, vec!["Sugar level is Low".to_string()]);
    }

    #[test]
    fn test_risk_reason_added_once() {
        let result = classify(
            Level::Normal,
            Level::Normal,
            &[cond("Diabetes"), cond("Heart Health Concern")],
        );
        assert_eq!(result.reasons, vec![RISK_CONDITION_REASON.to_string()]);
    }

    #[test]
    fn test_non_risk_conditions_ignored() {
        // Hypertension is not part of the risk set; only the BP level counts.
        let conditions = [
            cond("Hypertension (High BP)"),
            cond("Pre-diabetes"),
            cond("Cholesterol"),
            cond("Obesity"),
            cond("Low Blood Pressure"),
        ];
        let result = classify(Level::Normal, Level::Normal, &conditions);
        assert_eq!(result.label, PlanLabel::Suggested);
    }

    #[test]
    fn test_profile_fields_do_not_matter() {
        use crate::models::DietPreference;

        let a = UserProfile::new("A", 1, DietPreference::Veg, [], Level::High, Level::Normal)
            .unwrap();
        let b = UserProfile::new("B", 99, DietPreference::NonVeg, [], Level::High, Level::Normal)
            .unwrap();
        assert_eq!(classify_profile(&a), classify_profile(&b));
    }
}
