use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Names a movement setting may take. Mirrored by a CHECK constraint on
/// `movement_settings.name`.
pub const SETTING_NAMES: &[&str] = &[
    "repetitions",
    "weight",
    "lest",
    "duration",
    "distance",
    "rounds",
    "calories",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MovementSetting {
    pub setting_id: i32,
    pub name: String,
    pub founder_id: i32,
}
