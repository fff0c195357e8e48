use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt;

// With a lazy pool and no Postgres running, the endpoint must still answer
// 200 and report the database as unhealthy in the body.
#[tokio::test]
async fn health_reports_status_without_database() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "postgres://127.0.0.1:1/cosmic_chaos_unreachable");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::remove_var("OPENAI_API_KEY");
    let _ = cosmic_chaos_backend::config::init_config();

    let pool = cosmic_chaos_backend::database::pool::create_lazy_pool().expect("lazy pool");
    let state = cosmic_chaos_backend::AppState::new(pool);
    let app = Router::new()
        .route("/health", get(cosmic_chaos_backend::routes::health::health))
        .with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "ok");
    assert!(body["database"]
        .as_str()
        .expect("database status")
        .starts_with("unhealthy"));
}
