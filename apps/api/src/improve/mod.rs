//! AI Text-Improvement Gateway.
//!
//! Forwards free text to the completion service and normalizes the reply. An
//! empty or unparseable reply falls back to the caller's input; only transport
//! failures are returned as errors.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::improve::prompts::{EXPERIENCE_PROMPT, EXPERIENCE_SYSTEM, SUMMARY_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, Completion, LlmError};

pub mod handlers;
pub mod prompts;

#[derive(Debug, Deserialize)]
struct ImprovedPoints {
    points: Option<Vec<String>>,
}

/// Stateless adapter over a `Completion` transport. Cheap to clone.
#[derive(Clone)]
pub struct Improver {
    backend: Arc<dyn Completion>,
}

impl Improver {
    pub fn new(backend: Arc<dyn Completion>) -> Self {
        Self { backend }
    }

    /// Rewrites a professional summary. Returns `summary` unchanged when the
    /// service replies with no text.
    pub async fn improve_summary(&self, summary: &str) -> Result<String, LlmError> {
        let reply = self.backend.complete(summary, SUMMARY_SYSTEM).await?;

        match reply {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => {
                warn!("Summary improvement returned no text, keeping original");
                Ok(summary.to_string())
            }
        }
    }

    /// Rewrites experience bullet points. Returns `points` unchanged when the
    /// reply is empty, is not JSON, or carries no `points`.
    pub async fn improve_experience(&self, points: &[String]) -> Result<Vec<String>, LlmError> {
        let serialized = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
        let prompt = EXPERIENCE_PROMPT.replace("{points}", &serialized);
        let system = format!("{EXPERIENCE_SYSTEM} {JSON_ONLY_SYSTEM}");

        let reply = self.backend.complete(&prompt, &system).await?;

        match reply.as_deref().and_then(parse_points) {
            Some(improved) => {
                debug!("Improved {} experience points", improved.len());
                Ok(improved)
            }
            None => {
                warn!("Experience improvement reply unusable, keeping original points");
                Ok(points.to_vec())
            }
        }
    }
}

fn parse_points(reply: &str) -> Option<Vec<String>> {
    let parsed: ImprovedPoints = serde_json::from_str(strip_json_fences(reply)).ok()?;
    parsed.points.filter(|points| !points.is_empty())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{Completion, LlmError};

    /// Scripted transport: answers every call with the same reply and records
    /// the prompts it was given.
    pub struct ScriptedCompletion {
        reply: Result<Option<String>, u16>,
        pub prompts: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedCompletion {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(Some(text.to_string())),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn silent() -> Self {
            Self {
                reply: Ok(None),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Completion for ScriptedCompletion {
        async fn complete(&self, prompt: &str, system: &str) -> Result<Option<String>, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.to_string()));
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "scripted failure".to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedCompletion;
    use super::*;

    fn improver(backend: ScriptedCompletion) -> (Improver, Arc<ScriptedCompletion>) {
        let backend = Arc::new(backend);
        (Improver::new(backend.clone()), backend)
    }

    fn points() -> Vec<String> {
        vec![
            "Worked on the billing system".to_string(),
            "Helped new hires get started".to_string(),
        ]
    }

    #[tokio::test]
    async fn test_summary_reply_returned_verbatim() {
        let (improver, backend) = improver(ScriptedCompletion::replying("A sharper summary."));
        let improved = improver.improve_summary("My summary").await.unwrap();
        assert_eq!(improved, "A sharper summary.");

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts[0].0, "My summary");
        assert_eq!(prompts[0].1, SUMMARY_SYSTEM);
    }

    #[tokio::test]
    async fn test_summary_falls_back_on_absent_reply() {
        let (improver, _) = improver(ScriptedCompletion::silent());
        assert_eq!(improver.improve_summary("Keep me").await.unwrap(), "Keep me");
    }

    #[tokio::test]
    async fn test_summary_falls_back_on_blank_reply() {
        let (improver, _) = improver(ScriptedCompletion::replying("   \n"));
        assert_eq!(improver.improve_summary("Keep me").await.unwrap(), "Keep me");
    }

    #[tokio::test]
    async fn test_summary_transport_error_propagates() {
        let (improver, _) = improver(ScriptedCompletion::failing(503));
        let err = improver.improve_summary("Keep me").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_experience_parses_points() {
        let (improver, backend) = improver(ScriptedCompletion::replying(
            r#"{"points": ["Rebuilt billing, cutting failures 30%", "Onboarded 12 engineers"]}"#,
        ));
        let improved = improver.improve_experience(&points()).await.unwrap();
        assert_eq!(
            improved,
            vec![
                "Rebuilt billing, cutting failures 30%".to_string(),
                "Onboarded 12 engineers".to_string(),
            ]
        );

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].0.contains(r#"["Worked on the billing system","Helped new hires get started"]"#));
        assert!(prompts[0].1.contains("valid JSON only"));
    }

    #[tokio::test]
    async fn test_experience_accepts_fenced_json() {
        let (improver, _) = improver(ScriptedCompletion::replying(
            "```json\n{\"points\": [\"Shipped 3 releases\"]}\n```",
        ));
        let improved = improver.improve_experience(&points()).await.unwrap();
        assert_eq!(improved, vec!["Shipped 3 releases".to_string()]);
    }

    #[tokio::test]
    async fn test_experience_falls_back_on_malformed_reply() {
        let (improver, _) = improver(ScriptedCompletion::replying("Sure! Here are your points:"));
        assert_eq!(improver.improve_experience(&points()).await.unwrap(), points());
    }

    #[tokio::test]
    async fn test_experience_falls_back_on_missing_points_field() {
        let (improver, _) = improver(ScriptedCompletion::replying(r#"{"bullets": ["x"]}"#));
        assert_eq!(improver.improve_experience(&points()).await.unwrap(), points());
    }

    #[tokio::test]
    async fn test_experience_falls_back_on_empty_points() {
        let (improver, _) = improver(ScriptedCompletion::replying(r#"{"points": []}"#));
        assert_eq!(improver.improve_experience(&points()).await.unwrap(), points());
    }

    #[tokio::test]
    async fn test_experience_falls_back_on_absent_reply() {
        let (improver, _) = improver(ScriptedCompletion::silent());
        assert_eq!(improver.improve_experience(&points()).await.unwrap(), points());
    }

    #[tokio::test]
    async fn test_experience_transport_error_propagates() {
        let (improver, _) = improver(ScriptedCompletion::failing(500));
        assert!(improver.improve_experience(&points()).await.is_err());
    }
}
