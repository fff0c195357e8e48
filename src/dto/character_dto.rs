use serde::Deserialize;
use serde_json::Value as JsonValue;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacterPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub character_class: String,
    pub image_url: Option<String>,
    pub stats: Option<JsonValue>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCharacterPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub stats: Option<JsonValue>,
    pub experience: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
