use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};

use crate::dto::movement::{CreateMovementRequest, MovementResponse, UpdateMovementRequest};
use crate::error::{Result, StorageError};
use crate::models::Movement;

/// Repository for movements and their allowed settings
pub struct MovementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MovementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all movements with their setting ids
    pub async fn list(&self) -> Result<Vec<MovementResponse>> {
        let movements = sqlx::query_as::<_, Movement>(
            r#"
            SELECT movement_id, name, equipment_id, founder_id
            FROM movements
            ORDER BY movement_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<i32> = movements.iter().map(|m| m.movement_id).collect();
        let mut settings = self.settings_by_movement(&ids).await?;

        Ok(movements
            .into_iter()
            .map(|movement| {
                let setting_ids = settings.remove(&movement.movement_id).unwrap_or_default();
                MovementResponse::new(movement, setting_ids)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Movement> {
        sqlx::query_as::<_, Movement>(
            r#"
            SELECT movement_id, name, equipment_id, founder_id
            FROM movements
            WHERE movement_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Get a movement together with its setting ids
    pub async fn find_by_id_detailed(&self, id: i32) -> Result<MovementResponse> {
        let movement = self.find_by_id(id).await?;
        let settings = self
            .settings_by_movement(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(MovementResponse::new(movement, settings))
    }

    /// Create a movement and its setting links in one transaction
    pub async fn create(
        &self,
        req: &CreateMovementRequest,
        founder_id: i32,
    ) -> Result<MovementResponse> {
        let mut tx = self.pool.begin().await?;

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (name, equipment_id, founder_id)
            VALUES ($1, $2, $3)
            RETURNING movement_id, name, equipment_id, founder_id
            "#,
        )
        .bind(&req.name)
        .bind(req.equipment)
        .bind(founder_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(StorageError::from_write)?;

        replace_settings(&mut *tx, movement.movement_id, &req.settings).await?;

        tx.commit().await?;

        Ok(MovementResponse::new(movement, req.settings.clone()))
    }

    /// Update a movement; `settings`, when given, replaces the stored links
    pub async fn update(
        &self,
        existing: &Movement,
        req: &UpdateMovementRequest,
    ) -> Result<MovementResponse> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let equipment_id = req.equipment.unwrap_or(existing.equipment_id);

        let mut tx = self.pool.begin().await?;

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            UPDATE movements
            SET name = $2,
                equipment_id = $3
            WHERE movement_id = $1
            RETURNING movement_id, name, equipment_id, founder_id
            "#,
        )
        .bind(existing.movement_id)
        .bind(name)
        .bind(equipment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(StorageError::from_write)?
        .ok_or(StorageError::NotFound)?;

        if let Some(settings) = &req.settings {
            replace_settings(&mut *tx, movement.movement_id, settings).await?;
        }

        tx.commit().await?;

        let settings = self
            .settings_by_movement(&[movement.movement_id])
            .await?
            .remove(&movement.movement_id)
            .unwrap_or_default();

        Ok(MovementResponse::new(movement, settings))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM movements WHERE movement_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn settings_by_movement(&self, movement_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>> {
        let links = sqlx::query_as::<_, (i32, i32)>(
            r#"
            SELECT movement_id, setting_id
            FROM movement_allowed_settings
            WHERE movement_id = ANY($1)
            ORDER BY movement_id, position
            "#,
        )
        .bind(movement_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for (movement_id, setting_id) in links {
            grouped.entry(movement_id).or_default().push(setting_id);
        }

        Ok(grouped)
    }
}

async fn replace_settings(conn: &mut PgConnection, movement_id: i32, settings: &[i32]) -> Result<()> {
    sqlx::query("DELETE FROM movement_allowed_settings WHERE movement_id = $1")
        .bind(movement_id)
        .execute(&mut *conn)
        .await?;

    for (position, setting_id) in settings.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO movement_allowed_settings (movement_id, setting_id, position)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(movement_id)
        .bind(setting_id)
        .bind(position as i32)
        .execute(&mut *conn)
        .await
        .map_err(StorageError::from_write)?;
    }

    Ok(())
}
