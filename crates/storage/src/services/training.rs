use std::collections::HashMap;

use sqlx::PgPool;

use super::exercise_aggregate::load_exercises;
use crate::dto::training::TrainingResponse;
use crate::error::{Result, StorageError};
use crate::models::Training;
use crate::repository::exercise::ExerciseRepository;

/// Render one training with the full tree of its exercise
pub async fn load_training(pool: &PgPool, training: Training) -> Result<TrainingResponse> {
    load_trainings(pool, vec![training])
        .await?
        .pop()
        .ok_or(StorageError::NotFound)
}

/// Render trainings, loading each referenced exercise tree once
pub async fn load_trainings(pool: &PgPool, trainings: Vec<Training>) -> Result<Vec<TrainingResponse>> {
    let mut exercise_ids: Vec<i32> = trainings.iter().filter_map(|t| t.exercise_id).collect();
    exercise_ids.sort_unstable();
    exercise_ids.dedup();

    let exercises = ExerciseRepository::new(pool).find_by_ids(&exercise_ids).await?;
    let trees: HashMap<i32, _> = load_exercises(pool, exercises)
        .await?
        .into_iter()
        .map(|tree| (tree.id, tree))
        .collect();

    Ok(trainings
        .into_iter()
        .map(|training| {
            let exercise = training.exercise_id.and_then(|id| trees.get(&id).cloned());
            TrainingResponse::new(training, exercise)
        })
        .collect())
}
