use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub training_id: i32,
    pub founder_id: i32,
    pub date: NaiveDate,
    pub performance_type: String,
    pub performance_value: i32,
    pub done: bool,
    pub exercise_id: Option<i32>,
}
