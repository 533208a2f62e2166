#![allow(dead_code)]

//! Submission workflow — collects the two selected files and drives the
//! parse-resume → analyze-jd → match pipeline, strictly in that order.
//!
//! Each step's freshly returned identifier feeds the next call directly, so
//! the match request can never pick up a stale identifier from an earlier
//! run. A failed step aborts the remaining steps; identifiers already won in
//! the current run are kept so the caller can see how far the run got.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::MatchService;
use crate::errors::{ApiError, WorkflowError, WorkflowStep};
use crate::models::{JobId, MatchScore, ResumeId, SelectedFile};

/// Where a submission currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPhase {
    Idle,
    ParsingResume,
    AnalyzingJob,
    Matching,
    Succeeded(MatchScore),
    Failed { step: WorkflowStep, reason: String },
}

impl SubmissionPhase {
    fn is_in_flight(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::ParsingResume
                | SubmissionPhase::AnalyzingJob
                | SubmissionPhase::Matching
        )
    }
}

/// Drives one submission at a time against a [`MatchService`] backend.
pub struct SubmissionController {
    service: Arc<dyn MatchService>,
    resume: Option<SelectedFile>,
    job_description: Option<SelectedFile>,
    resume_id: Option<ResumeId>,
    job_id: Option<JobId>,
    match_score: Option<MatchScore>,
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn MatchService>) -> Self {
        SubmissionController {
            service,
            resume: None,
            job_description: None,
            resume_id: None,
            job_id: None,
            match_score: None,
            phase: SubmissionPhase::Idle,
        }
    }

    /// Selecting again overwrites the previous choice.
    pub fn select_resume(&mut self, file: SelectedFile) {
        self.resume = Some(file);
    }

    /// Selecting again overwrites the previous choice.
    pub fn select_job_description(&mut self, file: SelectedFile) {
        self.job_description = Some(file);
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn resume_id(&self) -> Option<ResumeId> {
        self.resume_id
    }

    pub fn job_id(&self) -> Option<JobId> {
        self.job_id
    }

    pub fn match_score(&self) -> Option<MatchScore> {
        self.match_score
    }

    /// Runs the three steps in order and returns the score.
    ///
    /// Preconditions are checked before any network call: both files must be
    /// selected and no other submission may be in flight. On step failure the
    /// phase records which step broke; stored state from steps that already
    /// succeeded (this run or a previous one) is left in place.
    pub async fn submit(&mut self) -> Result<MatchScore, WorkflowError> {
        if self.phase.is_in_flight() {
            return Err(WorkflowError::AlreadyRunning);
        }
        let resume = self
            .resume
            .clone()
            .ok_or_else(|| WorkflowError::Validation("no resume file selected".to_string()))?;
        let job_description = self.job_description.clone().ok_or_else(|| {
            WorkflowError::Validation("no job description file selected".to_string())
        })?;

        self.phase = SubmissionPhase::ParsingResume;
        let resume_id = match self.service.parse_resume(&resume).await {
            Ok(id) => id,
            Err(e) => return Err(self.fail(WorkflowStep::ParseResume, e)),
        };
        self.resume_id = Some(resume_id);
        debug!(%resume_id, "resume parsed");

        self.phase = SubmissionPhase::AnalyzingJob;
        let job_id = match self.service.analyze_jd(&job_description).await {
            Ok(id) => id,
            Err(e) => return Err(self.fail(WorkflowStep::AnalyzeJd, e)),
        };
        self.job_id = Some(job_id);
        debug!(%job_id, "job description analyzed");

        self.phase = SubmissionPhase::Matching;
        let score = match self.service.match_score(resume_id, job_id).await {
            Ok(s) => s,
            Err(e) => return Err(self.fail(WorkflowStep::Match, e)),
        };
        self.match_score = Some(score);
        self.phase = SubmissionPhase::Succeeded(score);
        info!(%resume_id, %job_id, %score, "match workflow completed");

        Ok(score)
    }

    fn fail(&mut self, step: WorkflowStep, source: ApiError) -> WorkflowError {
        tracing::error!("{step} step failed: {source}");
        self.phase = SubmissionPhase::Failed {
            step,
            reason: source.to_string(),
        };
        WorkflowError::Step { step, source }
    }
}
