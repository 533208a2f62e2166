//! Match service client — the single point of entry for all calls to the
//! job-matching API.
//!
//! The service exposes three endpoints: `POST /parse-resume` and
//! `POST /analyze-jd` take a multipart upload in field `file`; `POST /match`
//! takes a JSON body `{resume_id, job_id}` and returns `{score}`.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{JobId, MatchScore, ResumeId, SelectedFile};

/// The remote operations the submission workflow depends on.
/// Carried as `Arc<dyn MatchService>` so tests can swap in a fake backend
/// without touching the workflow code.
#[async_trait]
pub trait MatchService: Send + Sync {
    async fn parse_resume(&self, file: &SelectedFile) -> Result<ResumeId, ApiError>;
    async fn analyze_jd(&self, file: &SelectedFile) -> Result<JobId, ApiError>;
    async fn match_score(
        &self,
        resume_id: ResumeId,
        job_id: JobId,
    ) -> Result<MatchScore, ApiError>;
}

#[derive(Debug, Serialize)]
struct MatchRequest {
    resume_id: ResumeId,
    job_id: JobId,
}

/// HTTP implementation of [`MatchService`] over `reqwest`.
pub struct HttpMatchService {
    client: Client,
    base_url: String,
}

impl HttpMatchService {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(HttpMatchService {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn upload(&self, path: &str, file: &SelectedFile) -> Result<Value, ApiError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime)?;
        let form = multipart::Form::new().part("file", part);

        debug!(
            endpoint = path,
            file_name = %file.file_name,
            size = file.bytes.len(),
            "uploading file"
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }
}

#[async_trait]
impl MatchService for HttpMatchService {
    async fn parse_resume(&self, file: &SelectedFile) -> Result<ResumeId, ApiError> {
        let body = self.upload("/parse-resume", file).await?;
        Ok(ResumeId(require_i64(&body, "resume_id")?))
    }

    async fn analyze_jd(&self, file: &SelectedFile) -> Result<JobId, ApiError> {
        let body = self.upload("/analyze-jd", file).await?;
        Ok(JobId(require_i64(&body, "job_id")?))
    }

    async fn match_score(
        &self,
        resume_id: ResumeId,
        job_id: JobId,
    ) -> Result<MatchScore, ApiError> {
        let response = self
            .client
            .post(format!("{}/match", self.base_url))
            .json(&MatchRequest { resume_id, job_id })
            .send()
            .await?;
        let body = read_json(response).await?;
        Ok(MatchScore(require_f64(&body, "score")?))
    }
}

/// Checks the status and decodes the body as JSON.
/// Non-2xx responses are captured with their status and body text instead of
/// being collapsed into a generic failure.
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        warn!("match API returned {status}: {message}");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn require_i64(body: &Value, field: &'static str) -> Result<i64, ApiError> {
    body.get(field)
        .and_then(Value::as_i64)
        .ok_or(ApiError::MissingField { field })
}

fn require_f64(body: &Value, field: &'static str) -> Result<f64, ApiError> {
    body.get(field)
        .and_then(Value::as_f64)
        .ok_or(ApiError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_i64_extracts_field() {
        let body = json!({"resume_id": 42, "parsed_data": "…"});
        assert_eq!(require_i64(&body, "resume_id").unwrap(), 42);
    }

    #[test]
    fn test_require_i64_missing_field() {
        let body = json!({"id": 42});
        let err = require_i64(&body, "resume_id").unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "resume_id" }));
    }

    #[test]
    fn test_require_i64_rejects_non_integer() {
        let body = json!({"resume_id": "42"});
        assert!(require_i64(&body, "resume_id").is_err());
    }

    #[test]
    fn test_require_f64_accepts_integer_score() {
        let body = json!({"score": 1});
        assert_eq!(require_f64(&body, "score").unwrap(), 1.0);
    }

    #[test]
    fn test_require_f64_missing_field() {
        let body = json!({});
        let err = require_f64(&body, "score").unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "score" }));
    }

    #[test]
    fn test_match_request_wire_shape() {
        let req = MatchRequest {
            resume_id: ResumeId(42),
            job_id: JobId(7),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"resume_id": 42, "job_id": 7})
        );
    }
}
