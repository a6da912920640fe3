use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalogue movement. Its allowed settings live in
/// `movement_allowed_settings` and are loaded separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movement {
    pub movement_id: i32,
    pub name: String,
    pub equipment_id: Option<i32>,
    pub founder_id: i32,
}
