//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{
    analyze_resume_analytics, check_ats_compatibility, AtsResult, FeedbackResult, JobMatchResult,
    ResumeAnalytics,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub resume_text: String,
    /// Caller's own key for the external reviewer. Never stored.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: FeedbackResult,
    pub provider: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub analysis: JobMatchResult,
    pub provider: &'static str,
}

/// Body shared by the ATS and analytics endpoints.
#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/feedback
///
/// Full review. Uses the external reviewer when a key is available, the
/// heuristic engine otherwise (or when the external call fails).
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let provider = state.provider_for(request.api_key.as_deref());
    debug!(selected = provider.name(), "feedback requested");
    let out = provider.feedback(&request.resume_text).await;

    info!(provider = out.provider, score = out.value.score, "feedback served");

    Ok(Json(FeedbackResponse {
        feedback: out.value,
        provider: out.provider,
    }))
}

/// POST /api/v1/job-match
///
/// 400 when either text is blank.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let provider = state.provider_for(request.api_key.as_deref());
    debug!(selected = provider.name(), "job match requested");
    let out = provider
        .job_match(&request.resume_text, &request.job_description)
        .await?;

    info!(
        provider = out.provider,
        overall_match = out.value.overall_match,
        "job match served"
    );

    Ok(Json(JobMatchResponse {
        analysis: out.value,
        provider: out.provider,
    }))
}

/// POST /api/v1/ats
pub async fn handle_ats(Json(request): Json<ResumeTextRequest>) -> Json<AtsResult> {
    Json(check_ats_compatibility(&request.resume_text))
}

/// POST /api/v1/analytics
pub async fn handle_analytics(Json(request): Json<ResumeTextRequest>) -> Json<ResumeAnalytics> {
    Json(analyze_resume_analytics(&request.resume_text))
}
