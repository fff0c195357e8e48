use crate::models::personality::{GeneratedOption, GeneratedQuestion, PersonalityStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsQuery {
    pub skip: Option<i64>,
    /// Accepted for API compatibility; the response always holds 4 items.
    pub limit: Option<i64>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityQuestionResponse {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<GeneratedOption>,
    pub context_image: String,
    pub scenario_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonalityQuestionResponse {
    /// Questions in the generation path are transient: they get a fresh id
    /// and timestamps but are never persisted.
    pub fn from_generated(generated: GeneratedQuestion) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            question: generated.question,
            options: generated.options,
            context_image: generated.context_image,
            scenario_description: generated.scenario_description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTestPayload {
    pub user_id: Uuid,
    pub answers: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestResultsResponse {
    pub stats: PersonalityStats,
}
