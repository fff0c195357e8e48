use crate::dto::character_dto::{CreateCharacterPayload, UpdateCharacterPayload};
use crate::error::Result;
use crate::models::character::Character;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CharacterService {
    pool: PgPool,
}

impl CharacterService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, payload: &CreateCharacterPayload) -> Result<Character> {
        let stats = payload
            .stats
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));

        let character = sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters (id, user_id, name, character_class, image_url, stats, experience)
            VALUES ($1, $2, $3, $4, $5, $6, 0)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.character_class)
        .bind(payload.image_url.as_deref())
        .bind(stats)
        .fetch_one(&self.pool)
        .await?;

        Ok(character)
    }

    pub async fn list_for_user(&self, user_id: Uuid, skip: i64, limit: i64) -> Result<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT * FROM characters
            WHERE user_id = $1
            ORDER BY created_at
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    /// Fetches a character only if it belongs to the given user. Ownership
    /// checks for the character routes all go through here.
    pub async fn get_user_character(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(
            "SELECT * FROM characters WHERE id = $1 AND user_id = $2",
        )
        .bind(character_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }

    pub async fn get(&self, character_id: Uuid) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE id = $1")
            .bind(character_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(character)
    }

    pub async fn update(
        &self,
        character_id: Uuid,
        payload: &UpdateCharacterPayload,
    ) -> Result<Character> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            UPDATE characters
            SET name = COALESCE($2, name),
                image_url = COALESCE($3, image_url),
                stats = COALESCE($4, stats),
                experience = COALESCE($5, experience),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(character_id)
        .bind(payload.name.as_deref())
        .bind(payload.image_url.as_deref())
        .bind(payload.stats.clone())
        .bind(payload.experience)
        .fetch_one(&self.pool)
        .await?;

        Ok(character)
    }

    pub async fn delete(&self, character_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(character_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn add_experience(&self, character_id: Uuid, amount: i32) -> Result<Character> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            UPDATE characters
            SET experience = experience + $2,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(character_id)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(character)
    }
}
