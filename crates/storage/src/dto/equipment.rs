use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Equipment;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentResponse {
    pub id: i32,
    pub name: String,
    pub founder: i32,
}

/// Request payload for creating equipment. The founder is always the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

impl From<Equipment> for EquipmentResponse {
    fn from(equipment: Equipment) -> Self {
        Self {
            id: equipment.equipment_id,
            name: equipment.name,
            founder: equipment.founder_id,
        }
    }
}
