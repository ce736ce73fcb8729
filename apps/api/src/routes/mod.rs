pub mod analyze;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimizer::handlers::handle_optimize_resume;
use crate::skills::handlers::handle_extract_skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/analyze", post(analyze::handle_analyze))
        .route("/optimize-resume", post(handle_optimize_resume))
        .route("/extract-skills", post(handle_extract_skills))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::DateTime;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::{
        Completion, CompletionMetadata, CompletionResult, LlmError, MODEL,
    };

    /// Returns a canned reply (or `EmptyChoices` when `reply` is `None`) and
    /// records every prompt it receives.
    struct StubCompletion {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubCompletion {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Completion for StubCompletion {
        async fn complete(&self, prompt: &str) -> Result<CompletionResult, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let text = self.reply.clone().ok_or(LlmError::EmptyChoices)?;
            Ok(CompletionResult {
                text,
                metadata: CompletionMetadata {
                    model: MODEL.to_string(),
                    usage: json!({"prompt_tokens": 12, "completion_tokens": 34}),
                    created: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
                },
            })
        }
    }

    fn router_with(stub: Arc<StubCompletion>) -> Router {
        build_router(AppState { llm: stub })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(app, uri, body.to_string()).await
    }

    async fn send(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_welcome() {
        let app = router_with(StubCompletion::replying(""));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "Welcome to Resumate API"}));
    }

    #[tokio::test]
    async fn test_optimize_resume_end_to_end() {
        let stub = StubCompletion::replying(
            "- Built a distributed thing serving 10k users\n- Optional Bullet 3\n\n**Feedback:**\n- Added scale\n- Stronger verb",
        );
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/optimize-resume",
            json!({"type": "project", "text": "Built a thing"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section_type"], "project");
        assert_eq!(body["original_text"], "Built a thing");
        assert_eq!(
            body["bullet_points"],
            json!(["Built a distributed thing serving 10k users"])
        );
        assert_eq!(body["feedback"], json!(["Added scale", "Stronger verb"]));
        assert_eq!(body["metadata"]["model"], MODEL);
        assert_eq!(body["metadata"]["created"], 1_700_000_000);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Built a thing"));
    }

    #[tokio::test]
    async fn test_extract_skills_end_to_end() {
        let stub = StubCompletion::replying(
            "Languages: Python, Go\nFrameworks/Tools: —\nConcepts / Topics: Concurrency\nOthers: —\nSoft Skills: Teamwork",
        );
        let (status, body) = post_json(
            router_with(stub),
            "/extract-skills",
            json!({"resume_text": "Wrote Python and Go services"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["categories"],
            json!({"Languages": ["Python", "Go"], "Concepts / Topics": ["Concurrency"]})
        );
        assert_eq!(body["metadata"]["usage"]["completion_tokens"], 34);
    }

    #[tokio::test]
    async fn test_analyze_passes_prompt_through() {
        let stub = StubCompletion::replying("Hello there");
        let (status, body) =
            post_json(router_with(stub.clone()), "/analyze", json!({"prompt": "Say hi"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "Hello there");
        assert_eq!(body["metadata"]["model"], MODEL);
        assert_eq!(*stub.prompts.lock().unwrap(), vec!["Say hi".to_string()]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_detail() {
        for (uri, body) in [
            ("/analyze", json!({"prompt": "Say hi"})),
            ("/optimize-resume", json!({"type": "experience", "text": "Led a team"})),
            ("/extract-skills", json!({"resume_text": "Rust"})),
        ] {
            let (status, body) = post_json(router_with(StubCompletion::failing()), uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, json!({"detail": "No response generated"}), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_section_type_is_422() {
        let stub = StubCompletion::replying("- unused");
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/optimize-resume",
            json!({"type": "education", "text": "BSc"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_422() {
        let (status, body) = post_json(
            router_with(StubCompletion::replying("")),
            "/extract-skills",
            json!({"resume": "wrong key"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("resume_text"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (status, body) = send(
            router_with(StubCompletion::replying("")),
            "/analyze",
            "{not json".to_string(),
        )
        .await;

        assert!(status.is_client_error());
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_blank_text_is_400() {
        let stub = StubCompletion::replying("- unused");
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/optimize-resume",
            json!({"type": "experience", "text": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "text cannot be empty"}));
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_resume_text_is_400() {
        let stub = StubCompletion::replying("Languages: Rust");
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/extract-skills",
            json!({"resume_text": "\n\t "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "resume_text cannot be empty"}));
        assert!(stub.prompts.lock().unwrap().is_empty());
    }
}
