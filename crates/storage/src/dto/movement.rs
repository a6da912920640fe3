use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::double_option;
use crate::models::Movement;

/// A movement with the ids of the settings it accepts, in their stored order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovementResponse {
    pub id: i32,
    pub name: String,
    pub equipment: Option<i32>,
    pub founder: i32,
    pub settings: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovementRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub equipment: Option<i32>,

    #[serde(default)]
    pub settings: Vec<i32>,
}

/// Partial update of a movement. `equipment: null` detaches the equipment and
/// `settings` replaces the whole list when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMovementRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub equipment: Option<Option<i32>>,

    pub settings: Option<Vec<i32>>,
}

impl MovementResponse {
    pub fn new(movement: Movement, settings: Vec<i32>) -> Self {
        Self {
            id: movement.movement_id,
            name: movement.name,
            equipment: movement.equipment_id,
            founder: movement.founder_id,
            settings,
        }
    }
}
