use serde::Serialize;
use std::fmt;

use crate::error::{AppError, AppResult};
use domain::analysis::{Analysis, AnalysisOutcome};

pub const RESULT_HEADING: &str = "Analysis result";
pub const FAILURE_HEADING: &str = "Analysis failed";
pub const WARNING_HEADING: &str = "Warning";

/// What the user sees after one analyze trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub outcome: AnalysisOutcome,
    pub heading: String,
    pub body: String,
}

impl Presentation {
    fn new(outcome: AnalysisOutcome, heading: &str, body: String) -> Self {
        Self {
            outcome,
            heading: heading.to_string(),
            body,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            AnalysisOutcome::Succeeded | AnalysisOutcome::NotAttempted => f.write_str(&self.body),
            AnalysisOutcome::Failed => write!(f, "{}: {}", self.heading, self.body),
        }
    }
}

pub fn present(result: &AppResult<Analysis>) -> Presentation {
    match result {
        Ok(analysis) => Presentation::new(
            AnalysisOutcome::Succeeded,
            RESULT_HEADING,
            analysis.text.clone(),
        ),
        Err(AppError::MissingCredential) => Presentation::new(
            AnalysisOutcome::NotAttempted,
            WARNING_HEADING,
            "Please enter your OpenAI API key.".to_string(),
        ),
        Err(AppError::MissingDrawing) => Presentation::new(
            AnalysisOutcome::NotAttempted,
            WARNING_HEADING,
            "Please draw something on the canvas before analyzing it.".to_string(),
        ),
        Err(AppError::AnalysisInProgress) => Presentation::new(
            AnalysisOutcome::NotAttempted,
            WARNING_HEADING,
            "An analysis is already running. Wait for it to finish.".to_string(),
        ),
        Err(AppError::AnalysisFailed { message } | AppError::EncodingFailed { message }) => {
            Presentation::new(AnalysisOutcome::Failed, FAILURE_HEADING, message.clone())
        }
        Err(other) => Presentation::new(AnalysisOutcome::Failed, FAILURE_HEADING, other.to_string()),
    }
}
