use crate::dto::user_dto::UpdateProfilePayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        if self.get_by_email(email).await?.is_some() {
            return Err(Error::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password, provider)
            VALUES ($1, $2, $3, $4, 'local')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update_profile(&self, id: Uuid, payload: &UpdateProfilePayload) -> Result<User> {
        if let Some(email) = &payload.email {
            let taken = sqlx::query_scalar::<_, Uuid>(
                "SELECT id FROM users WHERE email = $1 AND id <> $2",
            )
            .bind(email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
            if taken.is_some() {
                return Err(Error::BadRequest(
                    "A user with this email already exists".to_string(),
                ));
            }
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                image_url = COALESCE($4, image_url),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.image_url.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
