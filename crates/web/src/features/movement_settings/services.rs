use sqlx::PgPool;
use storage::{
    dto::movement_setting::{CreateMovementSettingRequest, UpdateMovementSettingRequest},
    error::Result,
    models::{MovementSetting, Principal},
    repository::movement_setting::MovementSettingRepository,
};

/// List all movement settings
pub async fn list_movement_settings(pool: &PgPool) -> Result<Vec<MovementSetting>> {
    MovementSettingRepository::new(pool).list().await
}

pub async fn get_movement_setting(pool: &PgPool, id: i32) -> Result<MovementSetting> {
    MovementSettingRepository::new(pool).find_by_id(id).await
}

/// Create a movement setting owned by `founder`
pub async fn create_movement_setting(
    pool: &PgPool,
    founder: &Principal,
    request: &CreateMovementSettingRequest,
) -> Result<MovementSetting> {
    MovementSettingRepository::new(pool)
        .create(request, founder.user_id)
        .await
}

pub async fn update_movement_setting(
    pool: &PgPool,
    existing: &MovementSetting,
    request: &UpdateMovementSettingRequest,
) -> Result<MovementSetting> {
    MovementSettingRepository::new(pool)
        .update(existing, request)
        .await
}

pub async fn delete_movement_setting(pool: &PgPool, id: i32) -> Result<()> {
    MovementSettingRepository::new(pool).delete(id).await
}
