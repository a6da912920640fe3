use sqlx::PgPool;

use crate::dto::equipment::{CreateEquipmentRequest, UpdateEquipmentRequest};
use crate::error::{Result, StorageError};
use crate::models::Equipment;

pub struct EquipmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all equipment
    pub async fn list(&self) -> Result<Vec<Equipment>> {
        let equipments = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT equipment_id, name, founder_id
            FROM equipments
            ORDER BY equipment_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(equipments)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            SELECT equipment_id, name, founder_id
            FROM equipments
            WHERE equipment_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateEquipmentRequest, founder_id: i32) -> Result<Equipment> {
        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipments (name, founder_id)
            VALUES ($1, $2)
            RETURNING equipment_id, name, founder_id
            "#,
        )
        .bind(&req.name)
        .bind(founder_id)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(equipment)
    }

    pub async fn update(
        &self,
        existing: &Equipment,
        req: &UpdateEquipmentRequest,
    ) -> Result<Equipment> {
        let name = req.name.as_ref().unwrap_or(&existing.name);

        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipments
            SET name = $2
            WHERE equipment_id = $1
            RETURNING equipment_id, name, founder_id
            "#,
        )
        .bind(existing.equipment_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(StorageError::from_write)?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM equipments WHERE equipment_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
