use crate::models::{ClassificationResult, DailyPlan, UserProfile};
use crate::planner::constants::{
    DISCLAIMER, INSTRUCTIONS, INSTRUCTIONS_HEADING, MODIFICATION_HEADING, REPORT_TITLE,
    TABLE_HEADER,
};

/// Text weight/slant of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Bold,
    Italic,
}

/// One layout element of the report, in reading order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Paragraph { text: String, style: TextStyle },
    Heading(String),
    /// Vertical gap in points.
    Spacer(f32),
    Table {
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
}

impl Block {
    fn normal(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: TextStyle::Normal,
        }
    }

    /// Plain text carried by the block, cells joined by " | ".
    pub fn text(&self) -> String {
        match self {
            Block::Title(text) | Block::Heading(text) => text.clone(),
            Block::Paragraph { text, .. } => text.clone(),
            Block::Spacer(_) => String::new(),
            Block::Table { header, rows } => std::iter::once(header)
                .chain(rows)
                .map(|row| row.join(" | "))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Backend-neutral report layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text().contains(needle))
    }

    pub fn table(&self) -> Option<(&[String; 2], &[[String; 2]])> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table { header, rows } => Some((header, rows.as_slice())),
            _ => None,
        })
    }
}

/// Lay out the one-day plan report.
pub fn build_report(
    profile: &UserProfile,
    classification: &ClassificationResult,
    plan: &DailyPlan,
) -> ReportDocument {
    let mut blocks = vec![
        Block::Title(REPORT_TITLE.to_string()),
        Block::normal(format!("Name: {}", profile.name)),
        Block::normal(format!("Age: {}", profile.age)),
        Block::normal(format!("Food Preference: {}", profile.diet_preference)),
        Block::Spacer(10.0),
        Block::Paragraph {
            text: classification.label.title().to_string(),
            style: TextStyle::Bold,
        },
    ];

    if !classification.reasons.is_empty() {
        blocks.push(Block::normal(MODIFICATION_HEADING));
        for reason in &classification.reasons {
            blocks.push(Block::normal(format!("- {}", reason)));
        }
    }

    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::Table {
        header: TABLE_HEADER.map(String::from),
        rows: plan
            .slots
            .iter()
            .map(|slot| [slot.label.to_string(), slot.joined_names()])
            .collect(),
    });

    blocks.push(Block::Spacer(12.0));
    blocks.push(Block::Heading(INSTRUCTIONS_HEADING.to_string()));
    for line in INSTRUCTIONS {
        blocks.push(Block::normal(format!("- {}", line)));
    }

    blocks.push(Block::Spacer(10.0));
    blocks.push(Block::Paragraph {
        text: DISCLAIMER.to_string(),
        style: TextStyle::Italic,
    });

    ReportDocument { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietPreference, Level};
    use crate::planner::{classify, get_meals};

    fn profile() -> UserProfile {
        UserProfile::new("Test", 30, DietPreference::Veg, [], Level::Normal, Level::Normal).unwrap()
    }

    #[test]
    fn test_header_lines_in_order() {
        let report = build_report(
            &profile(),
            &classify(Level::Normal, Level::Normal, &[]),
            get_meals(DietPreference::Veg),
        );
        let texts: Vec<String> = report.blocks.iter().take(4).map(Block::text).collect();
        assert_eq!(
            texts,
            vec![
                REPORT_TITLE.to_string(),
                "Name: Test".to_string(),
                "Age: 30".to_string(),
                "Food Preference: Veg".to_string(),
            ]
        );
    }

    #[test]
    fn test_plan_label_is_bold() {
        let report = build_report(
            &profile(),
            &classify(Level::Low, Level::Normal, &[]),
            get_meals(DietPreference::Veg),
        );
        assert!(report.blocks.contains(&Block::Paragraph {
            text: "Modified Meal Plan".to_string(),
            style: TextStyle::Bold,
        }));
    }

    #[test]
    fn test_table_rows_follow_slots() {
        let plan = get_meals(DietPreference::NonVeg);
        let report = build_report(&profile(), &classify(Level::Normal, Level::Normal, &[]), plan);
        let (header, rows) = report.table().unwrap();
        assert_eq!(header, &["Meal Timing".to_string(), "Diet Plan".to_string()]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "Dinner (7:30–8:30 PM)");
        assert_eq!(rows[2][1], "2 chapati, Grilled fish / chicken, Vegetable curry");
    }

    #[test]
    fn test_instructions_and_disclaimer_close_the_report() {
        let report = build_report(
            &profile(),
            &classify(Level::Normal, Level::Normal, &[]),
            get_meals(DietPreference::Veg),
        );
        let n = report.blocks.len();
        assert_eq!(
            report.blocks[n - 1],
            Block::Paragraph {
                text: DISCLAIMER.to_string(),
                style: TextStyle::Italic,
            }
        );
        let instructions: Vec<String> =
            report.blocks[n - 6..n - 2].iter().map(Block::text).collect();
        assert_eq!(
            instructions,
            vec![
                "- Avoid oily and fried food",
                "- Drink adequate water",
                "- Prefer freshly cooked meals",
                "- Limit sugar and salt intake",
            ]
        );
        assert_eq!(report.blocks[n - 7], Block::Heading(INSTRUCTIONS_HEADING.to_string()));
    }
}
