pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::extraction::handlers::handle_extract;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/feedback", post(handlers::handle_feedback))
        .route("/api/v1/job-match", post(handlers::handle_job_match))
        .route("/api/v1/ats", post(handlers::handle_ats))
        .route("/api/v1/analytics", post(handlers::handle_analytics))
        // Extraction API
        .route("/api/v1/extract", post(handle_extract))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    const BOUNDARY: &str = "resume-review-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_multipart(field: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-review-api");
    }

    #[tokio::test]
    async fn test_feedback_without_key_uses_heuristic() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/feedback",
                json!({"resume_text": "Software engineer. Led 3 projects."}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "heuristic");
        assert_eq!(body["feedback"]["suggestions"].as_array().unwrap().len(), 5);
        let sections = body["feedback"]["sectionFeedback"].as_object().unwrap();
        assert!(sections.contains_key("Professional Summary"));
    }

    #[tokio::test]
    async fn test_feedback_empty_resume_scores_zero() {
        let (status, body) =
            send(app(), post_json("/api/v1/feedback", json!({"resume_text": ""}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"]["score"], 0);
    }

    #[tokio::test]
    async fn test_job_match_blank_description_is_bad_request() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/job-match",
                json!({"resume_text": "React developer", "job_description": "  "}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_job_match_reports_keywords() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/job-match",
                json!({
                    "resume_text": "React developer",
                    "job_description": "We need React and AWS experience."
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "heuristic");
        let missing = body["analysis"]["missingKeywords"].as_array().unwrap();
        assert!(missing.iter().any(|k| k == "AWS"));
    }

    #[tokio::test]
    async fn test_ats_flags_markdown_table() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/ats", json!({"resume_text": "| a | b |\n| --- | --- |"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let checks = body["formattingResults"].as_array().unwrap();
        let tables = checks.iter().find(|c| c["check"] == "Complex tables").unwrap();
        assert_eq!(tables["passed"], false);
    }

    #[tokio::test]
    async fn test_analytics() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/analytics",
                json!({"resume_text": "Software Engineer at Acme Inc. 4 years of experience with Python."}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"]["totalYears"], 4);
        assert_eq!(body["experience"]["recentRole"], "Software Engineer");
        assert_eq!(body["skills"][0]["name"], "python");
    }

    #[tokio::test]
    async fn test_extract_rejects_non_pdf() {
        let (status, body) = send(app(), post_multipart("file", b"plain text, not a pdf")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_extract_requires_file_field() {
        let (status, _) = send(app(), post_multipart("document", b"%PDF-1.4")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ats")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(), request).await;
        assert!(status.is_client_error());
    }
}
