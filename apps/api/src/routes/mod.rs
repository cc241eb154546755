pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bullet::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/status", get(health::status_handler))
        .route("/api/v1/bullet", post(handlers::handle_create_bullet))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::bullet::grader::RubricEvaluator;
    use crate::bullet::models::{BulletOptions, BulletRating, BulletRequest};
    use crate::bullet::writer::VariantGenerator;
    use crate::errors::AppError;

    struct CannedGenerator;

    #[async_trait]
    impl VariantGenerator for CannedGenerator {
        async fn generate(&self, request: &BulletRequest) -> Result<BulletOptions, AppError> {
            Ok(BulletOptions {
                list_of_bullets: vec![
                    "Grew revenue by 10%".to_string(),
                    "x".repeat(200),
                ],
                keyword: request.keyword().map(str::to_string),
            })
        }
    }

    /// Every flag true except `keyword_added`.
    struct CannedEvaluator {
        fail: bool,
    }

    #[async_trait]
    impl RubricEvaluator for CannedEvaluator {
        async fn evaluate(&self, options: &BulletOptions) -> Result<Vec<BulletRating>, AppError> {
            if self.fail {
                return Err(AppError::Llm("Bullet grading failed: 503".to_string()));
            }
            Ok((1..=options.list_of_bullets.len() as u32)
                .map(|bullet_id| BulletRating {
                    bullet_id,
                    strong_action_verb: true,
                    clear_meaning: true,
                    has_quantifiable_result: true,
                    result_makes_sense: true,
                    skill_can_be_deduced: true,
                    skill_is_valuable: true,
                    is_readable: true,
                    is_specific: true,
                    keyword_added: false,
                })
                .collect())
        }
    }

    fn test_app(fail_grading: bool) -> Router {
        build_router(AppState {
            generator: Arc::new(CannedGenerator),
            evaluator: Arc::new(CannedEvaluator { fail: fail_grading }),
        })
    }

    async fn read_body(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_bullet(body: Value) -> Request<Body> {
        Request::post("/api/v1/bullet")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_healthy() {
        let resp = test_app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Resume AI API");
    }

    #[tokio::test]
    async fn test_root_and_api_return_welcome() {
        for path in ["/", "/api"] {
            let resp = test_app(false)
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            let body = read_body(resp).await;
            assert_eq!(body["message"], "Welcome to Resume AI API");
            assert_eq!(body["status"], "running");
        }
    }

    #[tokio::test]
    async fn test_status_lists_endpoints() {
        let resp = test_app(false)
            .oneshot(Request::get("/api/v1/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["status"], "operational");
        assert_eq!(body["api_version"], env!("CARGO_PKG_VERSION"));
        let endpoints = body["endpoints"].as_array().unwrap();
        assert!(endpoints.contains(&json!("/api/v1/bullet")));
    }

    #[tokio::test]
    async fn test_create_bullet_returns_scored_list() {
        let resp = test_app(false)
            .oneshot(post_bullet(json!({
                "accomplished": "Increased revenue for 15 clients",
                "measured": "10% QoQ",
                "task": "Mapped features to business problems",
                "keyword": null
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        let list = body["bullet_list"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["bullet"], "Grew revenue by 10%");
        let first = list[0]["score"].as_f64().unwrap();
        assert!((first - 65.0 / 75.0).abs() < 1e-9, "Score was {first}");
        // 200 chars: half the length score
        let second = list[1]["score"].as_f64().unwrap();
        assert!((second - 60.0 / 75.0).abs() < 1e-9, "Score was {second}");
    }

    #[tokio::test]
    async fn test_blank_request_is_400() {
        let resp = test_app(false)
            .oneshot(post_bullet(json!({
                "accomplished": " ",
                "measured": "",
                "task": "",
                "keyword": "Rust"
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let resp = test_app(false)
            .oneshot(post_bullet(json!({ "accomplished": "Led a team" })))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_grading_failure_is_500_without_details() {
        let resp = test_app(true)
            .oneshot(post_bullet(json!({
                "accomplished": "Cut build times",
                "measured": "40%",
                "task": "Cached dependencies",
                "keyword": null
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = test_app(false)
            .oneshot(Request::get("/api/v2/bullet").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
