use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movement placed inside an exercise. Owned by the exercise.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseMovement {
    pub exercise_movement_id: i32,
    pub exercise_id: i32,
    pub movement_id: i32,
    pub movement_number: i32,
}

/// A setting value attached to one movement of an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseMovementSetting {
    pub exercise_movement_setting_id: i32,
    pub exercise_movement_id: i32,
    pub setting_id: i32,
    pub setting_value: Decimal,
}
