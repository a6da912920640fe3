use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const EXERCISE_TYPES: &[&str] = &["FORTIME", "AMRAP", "EMOM", "TABATA"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub exercise_id: i32,
    pub name: String,
    pub description: String,
    pub exercise_type: String,
    pub goal_type: String,
    pub goal_value: i32,
    pub founder_id: i32,
    pub is_default: bool,
    pub created_at: NaiveDateTime,
}
