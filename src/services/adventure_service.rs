use crate::dto::adventure_dto::{Reward, SaveProgressPayload};
use crate::error::Result;
use crate::models::adventure::{Adventure, CharacterProgress};
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AdventureService {
    pool: PgPool,
}

impl AdventureService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, adventure_id: Uuid) -> Result<Option<Adventure>> {
        let adventure = sqlx::query_as::<_, Adventure>("SELECT * FROM adventures WHERE id = $1")
            .bind(adventure_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(adventure)
    }

    /// Returns the story steps of an adventure as a flat array. `steps` is
    /// stored as a JSON array column.
    pub fn steps(adventure: &Adventure) -> Vec<JsonValue> {
        adventure
            .steps
            .as_array()
            .cloned()
            .unwrap_or_default()
    }

    /// Upserts a character's position in an adventure. A character keeps one
    /// progress row per adventure.
    pub async fn save_progress(&self, payload: &SaveProgressPayload) -> Result<CharacterProgress> {
        let choices = serde_json::to_value(&payload.choices)?;

        let progress = sqlx::query_as::<_, CharacterProgress>(
            r#"
            INSERT INTO character_progress (id, character_id, adventure_id, current_step, choices, completed)
            VALUES ($1, $2, $3, $4, $5, false)
            ON CONFLICT (character_id, adventure_id)
            DO UPDATE SET current_step = EXCLUDED.current_step,
                          choices = EXCLUDED.choices,
                          updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(payload.character_id)
        .bind(payload.adventure_id)
        .bind(payload.current_step)
        .bind(choices)
        .fetch_one(&self.pool)
        .await?;

        Ok(progress)
    }

    /// Placeholder reward schedule keyed off the current step: experience
    /// past step 3, a sample artifact past step 5.
    pub fn calculate_rewards(progress: &CharacterProgress) -> Vec<Reward> {
        let mut rewards = Vec::new();

        if progress.current_step > 3 {
            rewards.push(Reward {
                reward_type: "experience".to_string(),
                value: Some(50 * progress.current_step),
                id: None,
                name: None,
            });
        }

        if progress.current_step > 5 {
            rewards.push(Reward {
                reward_type: "artifact".to_string(),
                value: None,
                id: Some("some-artifact-id".to_string()),
                name: Some("Artefacto de ejemplo".to_string()),
            });
        }

        rewards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn progress_at(step: i32) -> CharacterProgress {
        CharacterProgress {
            id: Uuid::new_v4(),
            character_id: Uuid::new_v4(),
            adventure_id: Uuid::new_v4(),
            current_step: step,
            choices: serde_json::json!([]),
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn early_steps_earn_nothing() {
        assert!(AdventureService::calculate_rewards(&progress_at(3)).is_empty());
    }

    #[test]
    fn step_four_earns_scaled_experience() {
        let rewards = AdventureService::calculate_rewards(&progress_at(4));
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].reward_type, "experience");
        assert_eq!(rewards[0].value, Some(200));
    }

    #[test]
    fn step_six_adds_the_artifact_reward() {
        let rewards = AdventureService::calculate_rewards(&progress_at(6));
        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[0].value, Some(300));
        assert_eq!(rewards[1].reward_type, "artifact");
        assert!(rewards[1].id.is_some());
    }
}
