use sqlx::PgPool;

use crate::dto::training::{CreateTrainingRequest, UpdateTrainingRequest};
use crate::error::{Result, StorageError};
use crate::models::{Principal, Training};

pub struct TrainingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the trainings visible to `principal`: all of them for admins,
    /// only their own otherwise.
    pub async fn list_visible_to(&self, principal: &Principal) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>(
            r#"
            SELECT training_id, founder_id, date, performance_type, performance_value,
                   done, exercise_id
            FROM trainings
            WHERE $1 OR founder_id = $2
            ORDER BY training_id
            "#,
        )
        .bind(principal.is_admin)
        .bind(principal.user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(trainings)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Training> {
        sqlx::query_as::<_, Training>(
            r#"
            SELECT training_id, founder_id, date, performance_type, performance_value,
                   done, exercise_id
            FROM trainings
            WHERE training_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateTrainingRequest, founder_id: i32) -> Result<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (founder_id, date, performance_type, performance_value,
                                   done, exercise_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING training_id, founder_id, date, performance_type, performance_value,
                      done, exercise_id
            "#,
        )
        .bind(founder_id)
        .bind(req.date)
        .bind(&req.performance_type)
        .bind(req.performance_value)
        .bind(req.done)
        .bind(req.exercise_id())
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(training)
    }

    /// Merge the present fields over the stored row. The exercise link is
    /// never changed here.
    pub async fn update(&self, existing: &Training, req: &UpdateTrainingRequest) -> Result<Training> {
        let date = req.date.unwrap_or(existing.date);
        let performance_type = req
            .performance_type
            .as_ref()
            .unwrap_or(&existing.performance_type);
        let performance_value = req.performance_value.unwrap_or(existing.performance_value);
        let done = req.done.unwrap_or(existing.done);

        sqlx::query_as::<_, Training>(
            r#"
            UPDATE trainings
            SET date = $2,
                performance_type = $3,
                performance_value = $4,
                done = $5
            WHERE training_id = $1
            RETURNING training_id, founder_id, date, performance_type, performance_value,
                      done, exercise_id
            "#,
        )
        .bind(existing.training_id)
        .bind(date)
        .bind(performance_type)
        .bind(performance_value)
        .bind(done)
        .fetch_optional(self.pool)
        .await
        .map_err(StorageError::from_write)?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE training_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
