use std::fmt;

use thiserror::Error;

/// The three ordered steps of a submission. Carried in failures so callers
/// can tell which remote call broke the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    ParseResume,
    AnalyzeJd,
    Match,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::ParseResume => "parse-resume",
            WorkflowStep::AnalyzeJd => "analyze-jd",
            WorkflowStep::Match => "match",
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a single call to the matching service.
/// Transport failures, server rejections, and malformed bodies are kept
/// distinct rather than collapsed into one opaque failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response is missing expected field '{field}'")]
    MissingField { field: &'static str },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from the submission workflow as a whole.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("a submission is already in flight")]
    AlreadyRunning,

    #[error("{step} step failed: {source}")]
    Step {
        step: WorkflowStep,
        #[source]
        source: ApiError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names() {
        assert_eq!(WorkflowStep::ParseResume.as_str(), "parse-resume");
        assert_eq!(WorkflowStep::AnalyzeJd.as_str(), "analyze-jd");
        assert_eq!(WorkflowStep::Match.as_str(), "match");
    }

    #[test]
    fn test_step_failure_message_names_the_step() {
        let err = WorkflowError::Step {
            step: WorkflowStep::AnalyzeJd,
            source: ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("analyze-jd"), "got: {msg}");
    }
}
