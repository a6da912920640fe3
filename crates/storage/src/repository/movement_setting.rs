use sqlx::PgPool;

use crate::dto::movement_setting::{CreateMovementSettingRequest, UpdateMovementSettingRequest};
use crate::error::{Result, StorageError};
use crate::models::MovementSetting;

pub struct MovementSettingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MovementSettingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<MovementSetting>> {
        let settings = sqlx::query_as::<_, MovementSetting>(
            r#"
            SELECT setting_id, name, founder_id
            FROM movement_settings
            ORDER BY setting_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<MovementSetting> {
        sqlx::query_as::<_, MovementSetting>(
            r#"
            SELECT setting_id, name, founder_id
            FROM movement_settings
            WHERE setting_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(
        &self,
        req: &CreateMovementSettingRequest,
        founder_id: i32,
    ) -> Result<MovementSetting> {
        let setting = sqlx::query_as::<_, MovementSetting>(
            r#"
            INSERT INTO movement_settings (name, founder_id)
            VALUES ($1, $2)
            RETURNING setting_id, name, founder_id
            "#,
        )
        .bind(&req.name)
        .bind(founder_id)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(setting)
    }

    pub async fn update(
        &self,
        existing: &MovementSetting,
        req: &UpdateMovementSettingRequest,
    ) -> Result<MovementSetting> {
        let name = req.name.as_ref().unwrap_or(&existing.name);

        sqlx::query_as::<_, MovementSetting>(
            r#"
            UPDATE movement_settings
            SET name = $2
            WHERE setting_id = $1
            RETURNING setting_id, name, founder_id
            "#,
        )
        .bind(existing.setting_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(StorageError::from_write)?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM movement_settings WHERE setting_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
