use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the owner of an API key. `None` means the key is unknown.
    pub async fn find_by_api_key(&self, api_key: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, is_admin, api_key, created_at
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a user with a freshly generated API key
    pub async fn create(&self, username: &str, is_admin: bool) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, is_admin, api_key)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, is_admin, api_key, created_at
            "#,
        )
        .bind(username)
        .bind(is_admin)
        .bind(Uuid::new_v4())
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(user)
    }
}
