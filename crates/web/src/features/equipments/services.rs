use sqlx::PgPool;
use storage::{
    dto::equipment::{CreateEquipmentRequest, UpdateEquipmentRequest},
    error::Result,
    models::{Equipment, Principal},
    repository::equipment::EquipmentRepository,
};

/// List all equipment
pub async fn list_equipments(pool: &PgPool) -> Result<Vec<Equipment>> {
    EquipmentRepository::new(pool).list().await
}

pub async fn get_equipment(pool: &PgPool, id: i32) -> Result<Equipment> {
    EquipmentRepository::new(pool).find_by_id(id).await
}

/// Create equipment owned by `founder`
pub async fn create_equipment(
    pool: &PgPool,
    founder: &Principal,
    request: &CreateEquipmentRequest,
) -> Result<Equipment> {
    EquipmentRepository::new(pool)
        .create(request, founder.user_id)
        .await
}

pub async fn update_equipment(
    pool: &PgPool,
    existing: &Equipment,
    request: &UpdateEquipmentRequest,
) -> Result<Equipment> {
    EquipmentRepository::new(pool).update(existing, request).await
}

pub async fn delete_equipment(pool: &PgPool, id: i32) -> Result<()> {
    EquipmentRepository::new(pool).delete(id).await
}
