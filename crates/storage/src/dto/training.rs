use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::exercise::ExerciseResponse;
use crate::models::Training;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponse {
    pub id: i32,
    pub founder: i32,
    pub date: NaiveDate,
    pub performance_type: String,
    pub performance_value: i32,
    pub done: bool,
    pub exercise: Option<ExerciseResponse>,
}

/// Reference to the exercise a training is logged against. Only `id` is
/// read; the rest of a nested exercise object is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ExerciseReference {
    #[serde(default)]
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingRequest {
    pub date: NaiveDate,

    #[validate(length(
        min = 1,
        max = 32,
        message = "performance_type must be between 1 and 32 characters"
    ))]
    pub performance_type: String,

    #[serde(default)]
    pub performance_value: i32,

    #[serde(default)]
    pub done: bool,

    #[serde(default)]
    pub exercise: Option<ExerciseReference>,
}

/// Partial update of a training. The linked exercise is read-only: an
/// `exercise` object in the body is accepted and never applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 32))]
    pub performance_type: Option<String>,

    pub performance_value: Option<i32>,

    pub done: Option<bool>,
}

impl CreateTrainingRequest {
    pub fn exercise_id(&self) -> Option<i32> {
        self.exercise.as_ref().and_then(|exercise| exercise.id)
    }
}

impl TrainingResponse {
    pub fn new(training: Training, exercise: Option<ExerciseResponse>) -> Self {
        Self {
            id: training.training_id,
            founder: training.founder_id,
            date: training.date,
            performance_type: training.performance_type,
            performance_value: training.performance_value,
            done: training.done,
            exercise,
        }
    }
}
