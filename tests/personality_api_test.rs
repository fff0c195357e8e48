use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

fn init_test_config() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "postgres://localhost:5432/cosmic_chaos_test");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("GENERATE_QUESTIONS_ON_DEMAND", "false");
    env::remove_var("OPENAI_API_KEY");
    env::remove_var("GEMINI_API_KEY");
    let _ = cosmic_chaos_backend::config::init_config();
}

// The quiz endpoints never hit the database, so the lazy pool lets the whole
// router run without Postgres.
fn test_app() -> Router {
    let pool = cosmic_chaos_backend::database::pool::create_lazy_pool().expect("lazy pool");
    let state = cosmic_chaos_backend::AppState::new(pool);

    let public = Router::new().route(
        "/api/personality/questions",
        get(cosmic_chaos_backend::routes::personality::get_questions),
    );
    let protected = Router::new()
        .route(
            "/api/personality/results",
            post(cosmic_chaos_backend::routes::personality::submit_results),
        )
        .layer(axum::middleware::from_fn(
            cosmic_chaos_backend::middleware::auth::require_bearer_auth,
        ));

    public.merge(protected).with_state(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, JsonValue) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, value)
}

async fn post_json(app: Router, uri: &str, token: Option<&str>, body: JsonValue) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let response = app
        .oneshot(builder.body(Body::from(body.to_string())).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, value)
}

#[tokio::test]
async fn personality_api_end_to_end() {
    init_test_config();

    // English questions: always exactly four, each with four options.
    let (status, body) = get_json(test_app(), "/api/personality/questions").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().expect("question array");
    assert_eq!(questions.len(), 4);
    for question in questions {
        assert!(question["id"].as_str().is_some());
        assert!(!question["question"].as_str().unwrap_or("").is_empty());
        assert!(!question["scenario_description"]
            .as_str()
            .unwrap_or("")
            .is_empty());
        assert!(question["context_image"]
            .as_str()
            .unwrap_or("")
            .starts_with("http"));
        let options = question["options"].as_array().expect("options");
        assert_eq!(options.len(), 4);
        let mut values: Vec<i64> = options
            .iter()
            .map(|o| o["value"].as_i64().expect("value"))
            .collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4]);
        for option in options {
            assert!(option["emoji"].as_str().is_some());
            assert!(option["effect"].as_object().is_some());
        }
    }

    // The limit parameter is accepted but never changes the count or the
    // composition: one curated question per theme either way.
    for uri in [
        "/api/personality/questions?limit=2",
        "/api/personality/questions?limit=9",
    ] {
        let (status, body) = get_json(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        let questions = body.as_array().expect("question array");
        assert_eq!(questions.len(), 4);
        assert!(questions
            .iter()
            .all(|q| !q["question"].as_str().unwrap_or("").starts_with("Fallback question")));
    }

    // Spanish catalog: four questions, visibly Spanish.
    let (status, body) = get_json(test_app(), "/api/personality/questions?lang=es").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().expect("question array");
    assert_eq!(questions.len(), 4);
    for question in questions {
        let text = question["question"].as_str().unwrap_or("");
        assert!(
            text.contains('¿') || text.contains("fallback"),
            "expected Spanish question, got: {text}"
        );
    }

    // Unknown language tags resolve to English.
    let (status, body) = get_json(test_app(), "/api/personality/questions?lang=fr").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().expect("question array");
    assert!(questions
        .iter()
        .all(|q| !q["question"].as_str().unwrap_or("").contains('¿')));

    // Results need a token.
    let user_id = Uuid::new_v4();
    let payload = json!({"user_id": user_id, "answers": [4, 3, 2, 1]});
    let (status, _) = post_json(test_app(), "/api/personality/results", None, payload.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Scoring with the canonical answer vector.
    let token = cosmic_chaos_backend::utils::jwt::create_access_token(user_id).expect("token");
    let (status, body) =
        post_json(test_app(), "/api/personality/results", Some(&token), payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["quantum_charisma"], 60);
    assert_eq!(body["stats"]["absurdity_resistance"], 40);
    assert_eq!(body["stats"]["sarcasm_level"], 46);
    assert_eq!(body["stats"]["time_warping"], 24);
    assert_eq!(body["stats"]["cosmic_luck"], 70);

    // Submitting for another user is rejected.
    let other = json!({"user_id": Uuid::new_v4(), "answers": [4, 3, 2, 1]});
    let (status, _) = post_json(test_app(), "/api/personality/results", Some(&token), other).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A garbage token is rejected before the handler runs.
    let bad = json!({"user_id": user_id, "answers": [1]});
    let (status, _) = post_json(
        test_app(),
        "/api/personality/results",
        Some("not-a-token"),
        bad,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
