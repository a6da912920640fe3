use sqlx::PgPool;
use storage::{
    dto::exercise::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest},
    error::Result,
    models::{Exercise, Principal},
    repository::exercise::ExerciseRepository,
    services::exercise_aggregate,
};

/// Exercise trees the principal may read: admins see everything, others see
/// default exercises and their own.
pub async fn list_exercises(pool: &PgPool, principal: &Principal) -> Result<Vec<ExerciseResponse>> {
    let exercises = ExerciseRepository::new(pool).list_visible_to(principal).await?;
    exercise_aggregate::load_exercises(pool, exercises).await
}

pub async fn get_exercise(pool: &PgPool, id: i32) -> Result<Exercise> {
    ExerciseRepository::new(pool).find_by_id(id).await
}

pub async fn load_exercise(pool: &PgPool, exercise: Exercise) -> Result<ExerciseResponse> {
    exercise_aggregate::load_exercise(pool, exercise).await
}

pub async fn create_exercise(
    pool: &PgPool,
    founder: &Principal,
    request: &CreateExerciseRequest,
) -> Result<ExerciseResponse> {
    exercise_aggregate::create_exercise(pool, founder, request).await
}

pub async fn update_exercise(
    pool: &PgPool,
    existing: &Exercise,
    request: &UpdateExerciseRequest,
) -> Result<ExerciseResponse> {
    exercise_aggregate::update_exercise(pool, existing, request).await
}

pub async fn delete_exercise(pool: &PgPool, id: i32) -> Result<()> {
    ExerciseRepository::new(pool).delete(id).await
}
