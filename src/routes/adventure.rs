use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::adventure_dto::{ProgressResponse, SaveProgressPayload, StoryQuery},
    error::{Error, Result},
    middleware::auth::Claims,
    services::adventure_service::AdventureService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/adventure/story",
    params(
        ("adventure_id" = Uuid, Query, description = "Adventure ID")
    ),
    responses(
        (status = 200, description = "Story steps of the adventure"),
        (status = 404, description = "Adventure not found")
    )
)]
#[axum::debug_handler]
pub async fn get_story(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Query(query): Query<StoryQuery>,
) -> Result<impl IntoResponse> {
    let adventure = state
        .adventure_service
        .get(query.adventure_id)
        .await?
        .ok_or_else(|| Error::NotFound("Adventure not found".to_string()))?;

    Ok(Json(AdventureService::steps(&adventure)))
}

#[utoipa::path(
    post,
    path = "/api/adventure/progress",
    request_body = SaveProgressPayload,
    responses(
        (status = 200, description = "Progress saved with earned rewards", body = Json<ProgressResponse>),
        (status = 404, description = "Character or adventure not found")
    )
)]
#[axum::debug_handler]
pub async fn save_progress(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SaveProgressPayload>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    let character = state
        .character_service
        .get_user_character(user_id, payload.character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;

    state
        .adventure_service
        .get(payload.adventure_id)
        .await?
        .ok_or_else(|| Error::NotFound("Adventure not found".to_string()))?;

    let progress = state.adventure_service.save_progress(&payload).await?;
    let rewards = AdventureService::calculate_rewards(&progress);

    let mut character = character;
    for reward in &rewards {
        if reward.reward_type == "experience" {
            if let Some(value) = reward.value {
                character = state
                    .character_service
                    .add_experience(character.id, value)
                    .await?;
            }
        }
    }

    Ok(Json(ProgressResponse {
        character_id: character.id,
        current_step: progress.current_step,
        experience: character.experience,
        rewards,
    }))
}
