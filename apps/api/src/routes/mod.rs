pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{catalog, dashboard, interview, resume, study};

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/categories",
            get(catalog::handlers::handle_list_categories),
        )
        .route(
            "/api/v1/categories/:id",
            get(catalog::handlers::handle_get_category),
        )
        // One-off question / feedback
        .route(
            "/api/v1/questions/generate",
            post(interview::handlers::handle_generate_question),
        )
        .route("/api/v1/feedback", post(interview::handlers::handle_feedback))
        // Interview sessions
        .route(
            "/api/v1/interviews",
            post(interview::handlers::handle_start_interview),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview::handlers::handle_get_interview)
                .delete(interview::handlers::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/answer",
            post(interview::handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/skip",
            post(interview::handlers::handle_skip),
        )
        .route(
            "/api/v1/interviews/:id/finish",
            post(interview::handlers::handle_finish),
        )
        .route(
            "/api/v1/interviews/:id/report",
            get(interview::handlers::handle_get_report),
        )
        // Resume
        .route(
            "/api/v1/resume/compare",
            post(resume::handlers::handle_compare),
        )
        .route(
            "/api/v1/resume/extract",
            post(resume::handlers::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Study guide
        .route(
            "/api/v1/study/questions",
            get(study::handlers::handle_list_questions),
        )
        .route(
            "/api/v1/study/categories",
            get(study::handlers::handle_list_categories),
        )
        .route(
            "/api/v1/study/questions/:id/bookmark",
            post(study::handlers::handle_toggle_bookmark),
        )
        .route(
            "/api/v1/study/questions/:id/complete",
            post(study::handlers::handle_toggle_completed),
        )
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::handlers::handle_dashboard))
        .route("/api/v1/tips/random", get(dashboard::handlers::handle_random_tip))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::ScriptedModel;

    const QUESTION_JSON: &str = r#"{
        "scenario": "You own checkout for an online store.",
        "parts": ["How do you measure success?", "What do you ship first?"],
        "follow_up_questions": ["How would you handle a regression?"]
    }"#;

    const FEEDBACK_JSON: &str = r#"{
        "score": 80,
        "strengths": ["Clear metrics"],
        "improvements": ["Quantify impact"],
        "summary": "Solid answer.",
        "details": ["Good structure"]
    }"#;

    fn app_with(model: ScriptedModel) -> Router {
        build_router(AppState::new(Arc::new(model), Config::for_tests()))
    }

    fn app() -> Router {
        app_with(
            ScriptedModel::new()
                .reply("This is question", QUESTION_JSON)
                .reply("Analyze this interview answer", FEEDBACK_JSON),
        )
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "prepdeck-api");
    }

    #[tokio::test]
    async fn test_category_search_and_lookup() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/categories?search=market", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["id"] == "marketing"));

        let (status, body) = send(&app, Method::GET, "/api/v1/categories/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_full_interview_flow() {
        let app = app();
        let (status, started) = send(
            &app,
            Method::POST,
            "/api/v1/interviews",
            Some(json!({"category_id": "marketing", "settings": {"difficulty": "hard"}})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(started["questions"].as_array().unwrap().len(), 2);
        assert_eq!(started["current"]["part_index"], 0);
        let id = started["id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, Method::GET, &format!("/api/v1/interviews/{id}/report"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let answer = format!("/api/v1/interviews/{id}/answer");
        let (_, view) = send(&app, Method::POST, &answer, Some(json!({"answer": "Conversion rate"}))).await;
        assert_eq!(view["last_advance"], "next_part");
        let (_, view) = send(&app, Method::POST, &answer, Some(json!({"answer": "Guest checkout"}))).await;
        assert_eq!(view["last_advance"], "next_question");

        let (status, _) = send(&app, Method::POST, &answer, Some(json!({"answer": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let skip = format!("/api/v1/interviews/{id}/skip");
        send(&app, Method::POST, &skip, None).await;
        let (status, view) = send(&app, Method::POST, &skip, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["last_advance"], "exhausted");
        assert_eq!(view["status"], "completed");
        assert_eq!(view["report_ready"], true);

        let (status, report) =
            send(&app, Method::GET, &format!("/api/v1/interviews/{id}/report"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["overall_score"], 80);
        assert_eq!(report["evaluated_count"], 1);

        let (status, _) = send(&app, Method::POST, &answer, Some(json!({"answer": "late"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, stats) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
        assert_eq!(stats["interviews_completed"], 1);
        assert_eq!(stats["last_performance"], 80);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/interviews/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &format!("/api/v1/interviews/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_start_with_failing_model_uses_fallback_questions() {
        let app = app_with(ScriptedModel::new().fail("This is question", "overloaded"));
        let (status, started) = send(
            &app,
            Method::POST,
            "/api/v1/interviews",
            Some(json!({"category_id": "marketing"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(started["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["source"] == "fallback"));
    }

    #[tokio::test]
    async fn test_unknown_subcategory_is_not_found() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/v1/interviews",
            Some(json!({"category_id": "marketing", "subcategory_id": "underwater-basket-weaving"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_question_surfaces_model_failure() {
        let app = app_with(ScriptedModel::new().reply("This is question", "not json"));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/questions/generate",
            Some(json!({"category_id": "marketing", "difficulty": "easy"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_one_off_feedback() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/feedback",
            Some(json!({"question": "Why us?", "answer": "Your mission."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 80);
    }

    #[tokio::test]
    async fn test_study_toggle_and_filters() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/study/questions/4/bookmark", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "4");
        assert_eq!(body["bookmarked"], true);

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/study/questions?bookmarked_only=true&difficulty=hard",
            None,
        )
        .await;
        assert_eq!(body["total"], 2);

        let (status, _) = send(&app, Method::POST, "/api/v1/study/questions/99/complete", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_random_tip() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/tips/random", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["tip"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extract_text_upload() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\nJane Doe\nRust engineer\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["text"], "Jane Doe\nRust engineer");
        assert_eq!(doc["format"], "text");
    }

    #[tokio::test]
    async fn test_extract_rejects_unsupported_format() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"cv.docx\"\r\n\r\nbytes\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
