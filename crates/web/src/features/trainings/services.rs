use sqlx::PgPool;
use storage::{
    dto::training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest},
    error::Result,
    models::{Exercise, Principal, Training},
    repository::{exercise::ExerciseRepository, training::TrainingRepository},
    services::training as training_service,
};

/// Trainings the principal may see: all of them for admins, otherwise the
/// principal's own.
pub async fn list_trainings(pool: &PgPool, principal: &Principal) -> Result<Vec<TrainingResponse>> {
    let trainings = TrainingRepository::new(pool).list_visible_to(principal).await?;
    training_service::load_trainings(pool, trainings).await
}

pub async fn get_training(pool: &PgPool, id: i32) -> Result<Training> {
    TrainingRepository::new(pool).find_by_id(id).await
}

pub async fn get_exercise(pool: &PgPool, id: i32) -> Result<Exercise> {
    ExerciseRepository::new(pool).find_by_id(id).await
}

pub async fn load_training(pool: &PgPool, training: Training) -> Result<TrainingResponse> {
    training_service::load_training(pool, training).await
}

pub async fn create_training(
    pool: &PgPool,
    founder: &Principal,
    request: &CreateTrainingRequest,
) -> Result<TrainingResponse> {
    let training = TrainingRepository::new(pool)
        .create(request, founder.user_id)
        .await?;

    tracing::info!(
        training_id = training.training_id,
        founder_id = founder.user_id,
        exercise_id = ?training.exercise_id,
        "Training created"
    );

    training_service::load_training(pool, training).await
}

pub async fn update_training(
    pool: &PgPool,
    existing: &Training,
    request: &UpdateTrainingRequest,
) -> Result<TrainingResponse> {
    let training = TrainingRepository::new(pool).update(existing, request).await?;
    training_service::load_training(pool, training).await
}

pub async fn delete_training(pool: &PgPool, id: i32) -> Result<()> {
    TrainingRepository::new(pool).delete(id).await
}
