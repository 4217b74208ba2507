//! Feedback providers — pluggable review backends behind one trait.
//!
//! `HeuristicProvider` runs the deterministic engine. `ExternalAiProvider`
//! asks an OpenAI-compatible model and falls back to the heuristic engine on
//! any failure, so callers never see an external error.
//!
//! Handlers hold an `Arc<dyn FeedbackProvider>` chosen per request by
//! `select_provider`.

pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::{self, AnalysisError, FeedbackResult, JobMatchResult};
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError};

pub const HEURISTIC: &str = "heuristic";
pub const EXTERNAL_AI: &str = "external_ai";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A result together with the name of the backend that actually produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributed<T> {
    pub value: T,
    pub provider: &'static str,
}

impl<T> Attributed<T> {
    fn heuristic(value: T) -> Self {
        Self {
            value,
            provider: HEURISTIC,
        }
    }
}

#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn feedback(&self, resume_text: &str) -> Attributed<FeedbackResult>;

    /// Fails only on blank input; every other failure degrades to the heuristic result.
    async fn job_match(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Attributed<JobMatchResult>, AnalysisError>;
}

/// Picks the backend for one request. A usable key selects the external
/// reviewer; otherwise the deterministic engine.
pub fn select_provider(request_key: Option<&str>, config: &Config) -> Arc<dyn FeedbackProvider> {
    match config.resolve_api_key(request_key) {
        Some(key) => {
            let llm = LlmClient::new(
                key.to_string(),
                config.openai_model.clone(),
                &config.openai_base_url,
                config.ai_timeout,
            );
            Arc::new(ExternalAiProvider::new(llm))
        }
        None => Arc::new(HeuristicProvider),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicProvider
// ────────────────────────────────────────────────────────────────────────────

/// The deterministic rule-based engine. No I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicProvider;

#[async_trait]
impl FeedbackProvider for HeuristicProvider {
    fn name(&self) -> &'static str {
        HEURISTIC
    }

    async fn feedback(&self, resume_text: &str) -> Attributed<FeedbackResult> {
        Attributed::heuristic(analysis::analyze_resume(resume_text))
    }

    async fn job_match(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Attributed<JobMatchResult>, AnalysisError> {
        analysis::analyze_job_match(resume_text, job_description).map(Attributed::heuristic)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExternalAiProvider
// ────────────────────────────────────────────────────────────────────────────

pub struct ExternalAiProvider {
    llm: LlmClient,
    fallback: HeuristicProvider,
}

impl ExternalAiProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: HeuristicProvider,
        }
    }

    async fn request_feedback(&self, resume_text: &str) -> Result<FeedbackResult, LlmError> {
        let result: FeedbackResult = self
            .llm
            .call_json(
                &prompts::feedback_prompt(resume_text),
                &prompts::feedback_system(),
            )
            .await?;
        validate_feedback(&result)?;
        Ok(result)
    }

    async fn request_job_match(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<JobMatchResult, LlmError> {
        let result: JobMatchResult = self
            .llm
            .call_json(
                &prompts::job_match_prompt(resume_text, job_description),
                &prompts::job_match_system(),
            )
            .await?;
        validate_job_match(&result)?;
        Ok(result)
    }
}

#[async_trait]
impl FeedbackProvider for ExternalAiProvider {
    fn name(&self) -> &'static str {
        EXTERNAL_AI
    }

    async fn feedback(&self, resume_text: &str) -> Attributed<FeedbackResult> {
        // Nothing to send; the engine's empty-résumé branch is the answer.
        if resume_text.is_empty() {
            return self.fallback.feedback(resume_text).await;
        }

        match self.request_feedback(resume_text).await {
            Ok(value) => {
                info!(model = self.llm.model(), "external feedback accepted");
                Attributed {
                    value,
                    provider: EXTERNAL_AI,
                }
            }
            Err(e) => {
                warn!(error = %e, "external feedback failed, using heuristic engine");
                self.fallback.feedback(resume_text).await
            }
        }
    }

    async fn job_match(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Attributed<JobMatchResult>, AnalysisError> {
        if resume_text.trim().is_empty() || job_description.trim().is_empty() {
            return self.fallback.job_match(resume_text, job_description).await;
        }

        match self.request_job_match(resume_text, job_description).await {
            Ok(value) => {
                info!(model = self.llm.model(), "external job match accepted");
                Ok(Attributed {
                    value,
                    provider: EXTERNAL_AI,
                })
            }
            Err(e) => {
                warn!(error = %e, "external job match failed, using heuristic engine");
                self.fallback.job_match(resume_text, job_description).await
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Schema validation for model output
// ────────────────────────────────────────────────────────────────────────────

fn malformed(reason: &str) -> LlmError {
    LlmError::MalformedResponse(reason.to_string())
}

pub fn validate_feedback(result: &FeedbackResult) -> Result<(), LlmError> {
    if result.overall_impression.trim().is_empty() {
        return Err(malformed("overallImpression is empty"));
    }
    if result.score > 100 {
        return Err(malformed("score is outside 0-100"));
    }
    if result.suggestions.iter().all(|s| s.trim().is_empty()) {
        return Err(malformed("suggestions are missing"));
    }
    Ok(())
}

pub fn validate_job_match(result: &JobMatchResult) -> Result<(), LlmError> {
    if result.overall_match > 100 || result.relevance_score > 100 {
        return Err(malformed("match percentages are outside 0-100"));
    }
    if result.suggested_improvements.iter().all(|s| s.trim().is_empty()) {
        return Err(malformed("suggestedImprovements are missing"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::models::SectionFeedback;

    // Port 9 (discard) on loopback: connection refused, no network needed.
    const UNREACHABLE: &str = "http://127.0.0.1:9/v1";

    fn unreachable_provider() -> ExternalAiProvider {
        let llm = LlmClient::new(
            "sk-test".to_string(),
            "gpt-4o".to_string(),
            UNREACHABLE,
            Duration::from_millis(200),
        );
        ExternalAiProvider::new(llm)
    }

    fn feedback(impression: &str, score: u32, suggestions: &[&str]) -> FeedbackResult {
        FeedbackResult {
            overall_impression: impression.to_string(),
            section_feedback: SectionFeedback::new(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            score,
        }
    }

    #[test]
    fn test_select_provider_without_key_is_heuristic() {
        let provider = select_provider(None, &Config::default());
        assert_eq!(provider.name(), HEURISTIC);
        let provider = select_provider(Some("  "), &Config::default());
        assert_eq!(provider.name(), HEURISTIC);
    }

    #[test]
    fn test_select_provider_with_key_is_external() {
        assert_eq!(select_provider(Some("sk-1"), &Config::default()).name(), EXTERNAL_AI);
        let config = Config {
            openai_api_key: Some("sk-server".to_string()),
            ..Config::default()
        };
        assert_eq!(select_provider(None, &config).name(), EXTERNAL_AI);
    }

    #[tokio::test]
    async fn test_heuristic_feedback_matches_engine() {
        let text = "Software engineer. Led 3 projects.";
        let out = HeuristicProvider.feedback(text).await;
        assert_eq!(out.provider, HEURISTIC);
        assert_eq!(out.value, analysis::analyze_resume(text));
    }

    #[tokio::test]
    async fn test_heuristic_job_match_rejects_blank_description() {
        let err = HeuristicProvider.job_match("resume", "").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_external_feedback_falls_back_when_unreachable() {
        let text = "Data analyst with SQL skills. Improved reporting speed 30%.";
        let out = unreachable_provider().feedback(text).await;
        assert_eq!(out.provider, HEURISTIC);
        assert_eq!(out.value, analysis::analyze_resume(text));
    }

    #[tokio::test]
    async fn test_external_job_match_falls_back_when_unreachable() {
        let out = unreachable_provider()
            .job_match("React developer", "React and AWS experience required.")
            .await
            .unwrap();
        assert_eq!(out.provider, HEURISTIC);
        assert_eq!(out.value.suggested_improvements.len(), 5);
    }

    #[tokio::test]
    async fn test_external_job_match_blank_input_is_invalid() {
        let err = unreachable_provider().job_match("React", " ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_external_empty_resume_skips_network() {
        let out = unreachable_provider().feedback("").await;
        assert_eq!(out.provider, HEURISTIC);
        assert_eq!(out.value.score, 0);
    }

    #[test]
    fn test_validate_feedback() {
        assert!(validate_feedback(&feedback("Solid resume.", 80, &["Add metrics"])).is_ok());
        assert!(validate_feedback(&feedback("  ", 80, &["Add metrics"])).is_err());
        assert!(validate_feedback(&feedback("Solid resume.", 101, &["Add metrics"])).is_err());
        assert!(validate_feedback(&feedback("Solid resume.", 80, &[])).is_err());
    }

    #[test]
    fn test_validate_job_match() {
        let mut result = JobMatchResult {
            overall_match: 70,
            keyword_matches: vec![],
            missing_keywords: vec![],
            suggested_improvements: vec!["Mention AWS".to_string()],
            relevance_score: 75,
        };
        assert!(validate_job_match(&result).is_ok());
        result.relevance_score = 120;
        assert!(validate_job_match(&result).is_err());
        result.relevance_score = 75;
        result.suggested_improvements.clear();
        assert!(validate_job_match(&result).is_err());
    }

    #[test]
    fn test_model_reply_deserializes_into_feedback() {
        let reply = r#"{
            "overallImpression": "Clear and concise.",
            "sectionFeedback": {"Professional Summary": "Good", "Work Experience": "Strong"},
            "suggestions": ["Quantify results"],
            "score": 77
        }"#;
        let result: FeedbackResult = crate::llm_client::parse_json_reply(reply).unwrap();
        assert!(validate_feedback(&result).is_ok());
        let keys: Vec<&str> = result.section_feedback.keys().collect();
        assert_eq!(keys, vec!["Professional Summary", "Work Experience"]);
    }
}
