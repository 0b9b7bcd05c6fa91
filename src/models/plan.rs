use std::fmt;

use serde::Serialize;

/// Outcome label of the plan classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanLabel {
    /// No modification needed.
    Suggested,
    /// One or more risk signals present.
    Modified,
}

impl PlanLabel {
    pub fn title(&self) -> &'static str {
        match self {
            PlanLabel::Suggested => "Suggested Meal Plan",
            PlanLabel::Modified => "Modified Meal Plan",
        }
    }
}

impl fmt::Display for PlanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Plan label plus the ordered reasons that produced it.
///
/// `reasons` is empty exactly when the label is `Suggested`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub label: PlanLabel,
    pub reasons: Vec<String>,
}

impl ClassificationResult {
    /// Derive the label from the collected reasons.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        let label = if reasons.is_empty() {
            PlanLabel::Suggested
        } else {
            PlanLabel::Modified
        };
        Self { label, reasons }
    }

    pub fn is_modified(&self) -> bool {
        self.label == PlanLabel::Modified
    }
}
