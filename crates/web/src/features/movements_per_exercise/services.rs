use sqlx::PgPool;
use storage::{
    dto::exercise::{ExerciseMovementEntry, ExerciseMovementInput},
    error::Result,
    models::{Exercise, Principal},
    repository::exercise::ExerciseRepository,
    services::exercise_aggregate,
};

/// Movement rows of the exercises the principal may read
pub async fn list_movements(
    pool: &PgPool,
    principal: &Principal,
) -> Result<Vec<ExerciseMovementEntry>> {
    exercise_aggregate::list_exercise_movements(pool, principal).await
}

pub async fn get_exercise(pool: &PgPool, id: i32) -> Result<Exercise> {
    ExerciseRepository::new(pool).find_by_id(id).await
}

pub async fn add_movement(
    pool: &PgPool,
    exercise: &Exercise,
    entry: &ExerciseMovementInput,
) -> Result<ExerciseMovementEntry> {
    let created = exercise_aggregate::add_movement(pool, exercise.exercise_id, entry).await?;

    tracing::info!(
        exercise_id = exercise.exercise_id,
        exercise_movement_id = created.movement.id,
        settings = created.movement.movement_settings.len(),
        "Movement added to exercise"
    );

    Ok(created)
}
