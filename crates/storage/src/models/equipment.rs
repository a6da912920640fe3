use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipment {
    pub equipment_id: i32,
    pub name: String,
    pub founder_id: i32,
}
