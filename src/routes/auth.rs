use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, RegisterPayload, UserWithToken},
    error::{Error, Result},
    utils::{crypto, jwt},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User registered successfully", body = Json<UserWithToken>),
        (status = 400, description = "Invalid payload or email already taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let password_hash = crypto::hash_password(&payload.password)?;
    let user = state
        .user_service
        .create_user(&payload.name, &payload.email, &password_hash)
        .await?;

    let token = jwt::create_access_token(user.id)?;
    Ok((
        StatusCode::CREATED,
        Json(UserWithToken::from_user(user, token)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login successful", body = Json<UserWithToken>),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state
        .user_service
        .get_by_email(&payload.email)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid email or password".to_string()))?;

    if !crypto::verify_password(&payload.password, &user.password)? {
        return Err(Error::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = jwt::create_access_token(user.id)?;
    Ok(Json(UserWithToken::from_user(user, token)))
}
