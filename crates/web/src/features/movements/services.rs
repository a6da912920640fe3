use sqlx::PgPool;
use storage::{
    dto::movement::{CreateMovementRequest, MovementResponse, UpdateMovementRequest},
    error::Result,
    models::{Movement, Principal},
    repository::movement::MovementRepository,
};

/// List all movements with their settings
pub async fn list_movements(pool: &PgPool) -> Result<Vec<MovementResponse>> {
    MovementRepository::new(pool).list().await
}

pub async fn get_movement(pool: &PgPool, id: i32) -> Result<Movement> {
    MovementRepository::new(pool).find_by_id(id).await
}

pub async fn get_movement_detailed(pool: &PgPool, id: i32) -> Result<MovementResponse> {
    MovementRepository::new(pool).find_by_id_detailed(id).await
}

/// Create a movement owned by `founder`
pub async fn create_movement(
    pool: &PgPool,
    founder: &Principal,
    request: &CreateMovementRequest,
) -> Result<MovementResponse> {
    MovementRepository::new(pool)
        .create(request, founder.user_id)
        .await
}

pub async fn update_movement(
    pool: &PgPool,
    existing: &Movement,
    request: &UpdateMovementRequest,
) -> Result<MovementResponse> {
    MovementRepository::new(pool).update(existing, request).await
}

pub async fn delete_movement(pool: &PgPool, id: i32) -> Result<()> {
    MovementRepository::new(pool).delete(id).await
}
