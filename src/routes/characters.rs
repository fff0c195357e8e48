use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::character_dto::{CreateCharacterPayload, ListQuery, UpdateCharacterPayload},
    error::{Error, Result},
    middleware::auth::Claims,
    models::character::Character,
    AppState,
};

async fn owned_character(
    state: &AppState,
    claims: &Claims,
    character_id: Uuid,
) -> Result<Character> {
    let user_id = claims.user_id()?;
    state
        .character_service
        .get_user_character(user_id, character_id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))
}

#[utoipa::path(
    post,
    path = "/api/characters",
    request_body = CreateCharacterPayload,
    responses(
        (status = 201, description = "Character created", body = Json<Character>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_character(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCharacterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user_id = claims.user_id()?;
    let character = state.character_service.create(user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

#[utoipa::path(
    get,
    path = "/api/characters",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return")
    ),
    responses(
        (status = 200, description = "Characters of the current user", body = Json<Vec<Character>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_characters(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    let characters = state
        .character_service
        .list_for_user(user_id, query.skip.unwrap_or(0), query.limit.unwrap_or(100))
        .await?;
    Ok(Json(characters))
}

#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    params(
        ("id" = Uuid, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character detail", body = Json<Character>),
        (status = 404, description = "Character not found")
    )
)]
#[axum::debug_handler]
pub async fn get_character(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let character = owned_character(&state, &claims, id).await?;
    Ok(Json(character))
}

#[utoipa::path(
    put,
    path = "/api/characters/{id}",
    params(
        ("id" = Uuid, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterPayload,
    responses(
        (status = 200, description = "Character updated", body = Json<Character>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Character not found")
    )
)]
#[axum::debug_handler]
pub async fn update_character(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCharacterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    owned_character(&state, &claims, id).await?;
    let character = state.character_service.update(id, &payload).await?;
    Ok(Json(character))
}

#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    params(
        ("id" = Uuid, Path, description = "Character ID")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 404, description = "Character not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_character(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    owned_character(&state, &claims, id).await?;
    state.character_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
