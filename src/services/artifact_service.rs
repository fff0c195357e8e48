use crate::error::{Error, Result};
use crate::models::artifact::{Artifact, CharacterArtifact};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ArtifactService {
    pool: PgPool,
}

impl ArtifactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Artifact>> {
        let artifacts = sqlx::query_as::<_, Artifact>(
            "SELECT * FROM artifacts ORDER BY created_at OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(artifacts)
    }

    pub async fn get(&self, artifact_id: Uuid) -> Result<Option<Artifact>> {
        let artifact = sqlx::query_as::<_, Artifact>("SELECT * FROM artifacts WHERE id = $1")
            .bind(artifact_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artifact)
    }

    pub async fn get_assignment(
        &self,
        character_id: Uuid,
        artifact_id: Uuid,
    ) -> Result<Option<CharacterArtifact>> {
        let assignment = sqlx::query_as::<_, CharacterArtifact>(
            "SELECT * FROM character_artifacts WHERE character_id = $1 AND artifact_id = $2",
        )
        .bind(character_id)
        .bind(artifact_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    /// Links an artifact to a character. Each character may hold a given
    /// artifact at most once.
    pub async fn assign(&self, character_id: Uuid, artifact_id: Uuid) -> Result<CharacterArtifact> {
        if self.get(artifact_id).await?.is_none() {
            return Err(Error::NotFound("Artifact not found".to_string()));
        }
        if self.get_assignment(character_id, artifact_id).await?.is_some() {
            return Err(Error::BadRequest(
                "The character already has this artifact".to_string(),
            ));
        }

        let assignment = sqlx::query_as::<_, CharacterArtifact>(
            r#"
            INSERT INTO character_artifacts (id, character_id, artifact_id, is_active)
            VALUES ($1, $2, $3, true)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(character_id)
        .bind(artifact_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn update_assignment(
        &self,
        character_id: Uuid,
        artifact_id: Uuid,
        is_active: bool,
    ) -> Result<CharacterArtifact> {
        if self.get_assignment(character_id, artifact_id).await?.is_none() {
            return Err(Error::NotFound(
                "The character does not have this artifact".to_string(),
            ));
        }

        let assignment = sqlx::query_as::<_, CharacterArtifact>(
            r#"
            UPDATE character_artifacts
            SET is_active = $3,
                updated_at = now()
            WHERE character_id = $1 AND artifact_id = $2
            RETURNING *
            "#,
        )
        .bind(character_id)
        .bind(artifact_id)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }
}
