use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::artifact_dto::{AssignArtifactPayload, UpdateCharacterArtifactPayload},
    dto::character_dto::ListQuery,
    error::{Error, Result},
    middleware::auth::Claims,
    models::artifact::Artifact,
    models::character::Character,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/artifacts",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return")
    ),
    responses(
        (status = 200, description = "Available artifacts", body = Json<Vec<Artifact>>)
    )
)]
#[axum::debug_handler]
pub async fn list_artifacts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let artifacts = state
        .artifact_service
        .list(query.skip.unwrap_or(0), query.limit.unwrap_or(100))
        .await?;
    Ok(Json(artifacts))
}

#[utoipa::path(
    post,
    path = "/api/artifacts/characters/{character_id}/artifacts",
    params(
        ("character_id" = Uuid, Path, description = "Character ID")
    ),
    request_body = AssignArtifactPayload,
    responses(
        (status = 200, description = "Character with the artifact attached", body = Json<Character>),
        (status = 400, description = "Character already has this artifact"),
        (status = 404, description = "Character or artifact not found")
    )
)]
#[axum::debug_handler]
pub async fn add_artifact_to_character(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(character_id): Path<Uuid>,
    Json(payload): Json<AssignArtifactPayload>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    state
        .character_service
        .get_user_character(user_id, character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;

    state
        .artifact_service
        .assign(character_id, payload.artifact_id)
        .await?;

    let character = state
        .character_service
        .get(character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;
    Ok(Json(character))
}

#[utoipa::path(
    put,
    path = "/api/artifacts/characters/{character_id}/artifacts/{artifact_id}",
    params(
        ("character_id" = Uuid, Path, description = "Character ID"),
        ("artifact_id" = Uuid, Path, description = "Artifact ID")
    ),
    request_body = UpdateCharacterArtifactPayload,
    responses(
        (status = 200, description = "Character with the updated artifact", body = Json<Character>),
        (status = 404, description = "Character or assignment not found")
    )
)]
#[axum::debug_handler]
pub async fn update_character_artifact(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((character_id, artifact_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateCharacterArtifactPayload>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    state
        .character_service
        .get_user_character(user_id, character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;

    state
        .artifact_service
        .update_assignment(character_id, artifact_id, payload.is_active)
        .await?;

    let character = state
        .character_service
        .get(character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;
    Ok(Json(character))
}
