use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct StoryQuery {
    pub adventure_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveProgressPayload {
    pub character_id: Uuid,
    pub adventure_id: Uuid,
    pub current_step: i32,
    pub choices: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub reward_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub character_id: Uuid,
    pub current_step: i32,
    pub experience: i32,
    pub rewards: Vec<Reward>,
}
