pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    adventure_service::AdventureService, artifact_service::ArtifactService,
    character_service::CharacterService, chat_model::OpenAiChatModel,
    image_service::ImageService, llm_generator::LlmQuestionGenerator,
    question_service::{QuestionGenerator, QuestionService},
    simple_generator::SimpleQuestionGenerator, user_service::UserService,
};
use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub character_service: CharacterService,
    pub artifact_service: ArtifactService,
    pub adventure_service: AdventureService,
    pub question_service: Arc<QuestionService>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        let llm_timeout = Duration::from_secs(config.llm_timeout_secs);
        let simple = Arc::new(SimpleQuestionGenerator::new(&config.static_base_url));

        // The on-demand tier list holds only the LLM chain. The curated
        // generator is not a per-theme tier: a theme the chain cannot answer
        // drops its slot, and the curated catalogs serve only the flag-off
        // path and the fully failed batch.
        let mut tiers: Vec<Arc<dyn QuestionGenerator>> = Vec::new();
        if let Some(api_key) = &config.openai_api_key {
            let model = Arc::new(OpenAiChatModel::new(
                api_key.clone(),
                http_client.clone(),
                llm_timeout,
            ));
            let images = ImageService::new(
                config.gemini_api_key.clone(),
                http_client,
                config.image_generation_enabled,
                config.static_dir.clone(),
                config.static_base_url.clone(),
                llm_timeout,
            );
            tiers.push(Arc::new(LlmQuestionGenerator::new(model, images)));
        }

        let question_service = Arc::new(QuestionService::new(
            tiers,
            simple,
            config.generate_questions_on_demand,
        ));

        Self {
            pool: pool.clone(),
            user_service: UserService::new(pool.clone()),
            character_service: CharacterService::new(pool.clone()),
            artifact_service: ArtifactService::new(pool.clone()),
            adventure_service: AdventureService::new(pool),
            question_service,
        }
    }
}
