//! Typed HTTP client for the resume API.
//!
//! Used by the wizard to submit the finished draft and to request AI rewrites.
//! The `spawn_*` helpers run a request as a background task so the caller can
//! keep editing. Dropping or aborting the handle discards the result.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::improve::handlers::{
    ImproveExperienceRequest, ImproveExperienceResponse, ImproveSummaryRequest,
    ImproveSummaryResponse,
};
use crate::models::resume::{Resume, ResumeDocument};
use crate::validation::{ValidationErrors, Violation};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        violations: Vec<Violation>,
    },

    #[error("background request was aborted")]
    Aborted,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Aborted => None,
        }
    }

    /// Field violations reported by a 400 response.
    pub fn violations(&self) -> Option<ValidationErrors> {
        match self {
            ClientError::Api { violations, .. } if !violations.is_empty() => {
                Some(ValidationErrors(violations.clone()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    violations: Vec<Violation>,
}

#[derive(Clone)]
pub struct ResumeApiClient {
    http: Client,
    base_url: String,
}

impl ResumeApiClient {
    /// `base_url` is the server origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_resume(&self, document: &ResumeDocument) -> Result<Resume, ClientError> {
        let response = self
            .http
            .post(self.url("/api/resumes"))
            .json(document)
            .send()
            .await?;
        decode(response).await
    }

    /// `Ok(None)` when the server has no resume with that id.
    pub async fn get_resume(&self, id: u64) -> Result<Option<Resume>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/resumes/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    pub async fn list_resumes(&self) -> Result<Vec<Resume>, ClientError> {
        let response = self.http.get(self.url("/api/resumes")).send().await?;
        decode(response).await
    }

    pub async fn update_resume(
        &self,
        id: u64,
        document: &ResumeDocument,
    ) -> Result<Resume, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/resumes/{id}")))
            .json(document)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_resume(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/resumes/{id}")))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    pub async fn improve_summary(&self, summary: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.url("/api/improve/summary"))
            .json(&ImproveSummaryRequest {
                summary: summary.to_string(),
            })
            .send()
            .await?;
        let body: ImproveSummaryResponse = decode(response).await?;
        Ok(body.improved)
    }

    pub async fn improve_experience(
        &self,
        description: &[String],
    ) -> Result<Vec<String>, ClientError> {
        let response = self
            .http
            .post(self.url("/api/improve/experience"))
            .json(&ImproveExperienceRequest {
                description: description.to_vec(),
            })
            .send()
            .await?;
        let body: ImproveExperienceResponse = decode(response).await?;
        Ok(body.improved)
    }

    pub fn spawn_improve_summary(&self, summary: String) -> PendingImprovement<String> {
        let client = self.clone();
        PendingImprovement(tokio::spawn(async move {
            client.improve_summary(&summary).await
        }))
    }

    pub fn spawn_improve_experience(&self, description: Vec<String>) -> PendingImprovement<Vec<String>> {
        let client = self.clone();
        PendingImprovement(tokio::spawn(async move {
            client.improve_experience(&description).await
        }))
    }
}

/// An AI rewrite running in the background.
pub struct PendingImprovement<T>(JoinHandle<Result<T, ClientError>>);

impl<T> PendingImprovement<T> {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    /// Waits for the rewrite.
    pub async fn wait(self) -> Result<T, ClientError> {
        self.0.await.map_err(|_| ClientError::Aborted)?
    }

    /// Cancels the request. A later `wait` yields `ClientError::Aborted` unless
    /// the rewrite had already finished.
    pub fn abort(&self) {
        self.0.abort();
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => ClientError::Api {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
            violations: envelope.error.violations,
        },
        Err(_) => ClientError::Api {
            status,
            code: "UNKNOWN".to_string(),
            message: body,
            violations: Vec::new(),
        },
    }
}
