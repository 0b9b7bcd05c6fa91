pub mod pdf;
pub mod report;

use log::debug;

use crate::error::Result;
use crate::models::{ClassificationResult, DailyPlan, UserProfile};
use crate::planner::PlanOutcome;
use crate::planner::constants::{REPORT_CONTENT_TYPE, REPORT_FILE_NAME};

pub use pdf::{render_pdf, render_pdf_to};
pub use report::{Block, ReportDocument, TextStyle, build_report};

/// A fully generated document, ready to be offered for download.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Generate the PDF report. Any backend failure is returned as `ExportFailed`.
pub fn export(
    profile: &UserProfile,
    classification: &ClassificationResult,
    plan: &DailyPlan,
) -> Result<ExportedDocument> {
    let report = build_report(profile, classification, plan);
    let bytes = render_pdf(&report)?;
    debug!("rendered {} ({} bytes)", REPORT_FILE_NAME, bytes.len());

    Ok(ExportedDocument {
        file_name: REPORT_FILE_NAME,
        content_type: REPORT_CONTENT_TYPE,
        bytes,
    })
}

pub fn export_outcome(outcome: &PlanOutcome) -> Result<ExportedDocument> {
    export(&outcome.profile, &outcome.classification, outcome.plan)
}
