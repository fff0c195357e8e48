use axum::{
    routing::{get, post},
    Router,
};
use cosmic_chaos_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/artifacts", get(routes::artifacts::list_artifacts))
        .route(
            "/api/personality/questions",
            get(routes::personality::get_questions),
        );

    let protected_api = Router::new()
        .route(
            "/api/users/profile",
            get(routes::users::get_profile).put(routes::users::update_profile),
        )
        .route(
            "/api/characters",
            get(routes::characters::list_characters).post(routes::characters::create_character),
        )
        .route(
            "/api/characters/:id",
            get(routes::characters::get_character)
                .put(routes::characters::update_character)
                .delete(routes::characters::delete_character),
        )
        .route(
            "/api/artifacts/characters/:character_id/artifacts",
            post(routes::artifacts::add_artifact_to_character),
        )
        .route(
            "/api/artifacts/characters/:character_id/artifacts/:artifact_id",
            axum::routing::put(routes::artifacts::update_character_artifact),
        )
        .route("/api/adventure/story", get(routes::adventure::get_story))
        .route(
            "/api/adventure/progress",
            post(routes::adventure::save_progress),
        )
        .route(
            "/api/personality/results",
            post(routes::personality::submit_results),
        )
        .layer(axum::middleware::from_fn(
            cosmic_chaos_backend::middleware::auth::require_bearer_auth,
        ));

    let app = public_api
        .merge(protected_api)
        .nest_service("/static", ServeDir::new(config.static_dir.clone()))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
