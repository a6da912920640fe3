use rust_decimal::Decimal;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::dto::exercise::CreateExerciseRequest;
use crate::error::{Result, StorageError};
use crate::models::{Exercise, ExerciseMovement, ExerciseMovementSetting, Principal};

const EXERCISE_COLUMNS: &str = "exercise_id, name, description, exercise_type, goal_type, \
     goal_value, founder_id, is_default, created_at";

/// Flat exercise fields after merging an update over the stored row
pub struct ExerciseFields<'r> {
    pub name: &'r str,
    pub description: &'r str,
    pub exercise_type: &'r str,
    pub goal_type: &'r str,
    pub goal_value: i32,
}

/// Repository for exercises and the movement/setting rows they own.
///
/// Reads that the aggregate services also run inside a transaction take a
/// generic executor; writes take the transaction's connection.
pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the exercises visible to `principal`: every row for admins,
    /// default exercises plus their own for everyone else.
    pub async fn list_visible_to(&self, principal: &Principal) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises
            WHERE $1 OR is_default OR founder_id = $2
            ORDER BY exercise_id
            "#
        ))
        .bind(principal.is_admin)
        .bind(principal.user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Exercise> {
        sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE exercise_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE exercise_id = ANY($1) ORDER BY exercise_id"
        ))
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Delete an exercise; its movement and setting rows go with it
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE exercise_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Exercise-movement rows of every exercise visible to `principal`, with
    /// the same scoping as [`Self::list_visible_to`]
    pub async fn list_movements_visible_to(
        &self,
        principal: &Principal,
    ) -> Result<Vec<ExerciseMovement>> {
        let rows = sqlx::query_as::<_, ExerciseMovement>(
            r#"
            SELECT em.exercise_movement_id, em.exercise_id, em.movement_id, em.movement_number
            FROM exercise_movements em
            JOIN exercises e ON e.exercise_id = em.exercise_id
            WHERE $1 OR e.is_default OR e.founder_id = $2
            ORDER BY em.exercise_movement_id
            "#,
        )
        .bind(principal.is_admin)
        .bind(principal.user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Movement rows of the given exercises, in storage order
    pub async fn movements_of<'e>(
        executor: impl PgExecutor<'e>,
        exercise_ids: &[i32],
    ) -> Result<Vec<ExerciseMovement>> {
        let rows = sqlx::query_as::<_, ExerciseMovement>(
            r#"
            SELECT exercise_movement_id, exercise_id, movement_id, movement_number
            FROM exercise_movements
            WHERE exercise_id = ANY($1)
            ORDER BY exercise_movement_id
            "#,
        )
        .bind(exercise_ids)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Setting rows of the given exercise-movement rows, in storage order
    pub async fn settings_of<'e>(
        executor: impl PgExecutor<'e>,
        exercise_movement_ids: &[i32],
    ) -> Result<Vec<ExerciseMovementSetting>> {
        let rows = sqlx::query_as::<_, ExerciseMovementSetting>(
            r#"
            SELECT exercise_movement_setting_id, exercise_movement_id, setting_id, setting_value
            FROM exercise_movement_settings
            WHERE exercise_movement_id = ANY($1)
            ORDER BY exercise_movement_setting_id
            "#,
        )
        .bind(exercise_movement_ids)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    pub async fn insert(
        conn: &mut PgConnection,
        req: &CreateExerciseRequest,
        founder_id: i32,
        is_default: bool,
    ) -> Result<Exercise> {
        sqlx::query_as::<_, Exercise>(&format!(
            r#"
            INSERT INTO exercises (name, description, exercise_type, goal_type, goal_value,
                                   founder_id, is_default)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.exercise_type)
        .bind(&req.goal_type)
        .bind(req.goal_value)
        .bind(founder_id)
        .bind(is_default)
        .fetch_one(conn)
        .await
        .map_err(StorageError::from_write)
    }

    pub async fn update_fields(
        conn: &mut PgConnection,
        id: i32,
        fields: &ExerciseFields<'_>,
    ) -> Result<Exercise> {
        sqlx::query_as::<_, Exercise>(&format!(
            r#"
            UPDATE exercises
            SET name = $2,
                description = $3,
                exercise_type = $4,
                goal_type = $5,
                goal_value = $6
            WHERE exercise_id = $1
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.exercise_type)
        .bind(fields.goal_type)
        .bind(fields.goal_value)
        .fetch_optional(conn)
        .await
        .map_err(StorageError::from_write)?
        .ok_or(StorageError::NotFound)
    }

    pub async fn insert_movement(
        conn: &mut PgConnection,
        exercise_id: i32,
        movement_id: i32,
        movement_number: i32,
    ) -> Result<ExerciseMovement> {
        sqlx::query_as::<_, ExerciseMovement>(
            r#"
            INSERT INTO exercise_movements (exercise_id, movement_id, movement_number)
            VALUES ($1, $2, $3)
            RETURNING exercise_movement_id, exercise_id, movement_id, movement_number
            "#,
        )
        .bind(exercise_id)
        .bind(movement_id)
        .bind(movement_number)
        .fetch_one(conn)
        .await
        .map_err(StorageError::from_write)
    }

    pub async fn insert_setting(
        conn: &mut PgConnection,
        exercise_movement_id: i32,
        setting_id: i32,
        setting_value: Decimal,
    ) -> Result<ExerciseMovementSetting> {
        sqlx::query_as::<_, ExerciseMovementSetting>(
            r#"
            INSERT INTO exercise_movement_settings (exercise_movement_id, setting_id, setting_value)
            VALUES ($1, $2, $3)
            RETURNING exercise_movement_setting_id, exercise_movement_id, setting_id, setting_value
            "#,
        )
        .bind(exercise_movement_id)
        .bind(setting_id)
        .bind(setting_value)
        .fetch_one(conn)
        .await
        .map_err(StorageError::from_write)
    }

    /// Point an existing movement row at another movement and position
    pub async fn overwrite_movement(
        conn: &mut PgConnection,
        exercise_movement_id: i32,
        movement_id: i32,
        movement_number: i32,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE exercise_movements
            SET movement_id = $2,
                movement_number = $3
            WHERE exercise_movement_id = $1
            "#,
        )
        .bind(exercise_movement_id)
        .bind(movement_id)
        .bind(movement_number)
        .execute(conn)
        .await
        .map_err(StorageError::from_write)?;

        Ok(())
    }

    pub async fn overwrite_setting(
        conn: &mut PgConnection,
        exercise_movement_setting_id: i32,
        setting_id: i32,
        setting_value: Decimal,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE exercise_movement_settings
            SET setting_id = $2,
                setting_value = $3
            WHERE exercise_movement_setting_id = $1
            "#,
        )
        .bind(exercise_movement_setting_id)
        .bind(setting_id)
        .bind(setting_value)
        .execute(conn)
        .await
        .map_err(StorageError::from_write)?;

        Ok(())
    }
}
