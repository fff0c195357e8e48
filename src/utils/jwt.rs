use crate::config::get_config;
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

/// Issues an HS256 access token for the given user id.
pub fn create_access_token(subject: Uuid) -> Result<String> {
    let config = get_config();
    let expire = Utc::now() + Duration::minutes(config.access_token_expire_minutes);
    let claims = Claims {
        sub: subject.to_string(),
        exp: expire.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign access token: {}", e)))
}
