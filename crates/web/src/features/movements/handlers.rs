use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::movement::{CreateMovementRequest, MovementResponse, UpdateMovementRequest},
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/movements/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all movements", body = Vec<MovementResponse>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "movements"
)]
pub async fn list_movements(State(db): State<Database>) -> Result<Response, WebError> {
    let movements = services::list_movements(db.pool()).await?;

    Ok(Json(movements).into_response())
}

#[utoipa::path(
    get,
    path = "/movements/{id}/",
    params(
        ("id" = i32, Path, description = "Movement id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement with its setting ids", body = MovementResponse),
        (status = 403, description = "Not authenticated"),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn get_movement(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let movement = services::get_movement(db.pool(), id).await?;
    Resource::Movement.authorize(&principal, Action::Read, &movement)?;

    let detailed = services::get_movement_detailed(db.pool(), movement.movement_id).await?;

    Ok(Json(detailed).into_response())
}

#[utoipa::path(
    post,
    path = "/movements/",
    request_body = CreateMovementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Movement created", body = MovementResponse),
        (status = 400, description = "Validation error, duplicate name or unknown reference"),
        (status = 403, description = "Admin only")
    ),
    tag = "movements"
)]
pub async fn create_movement(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateMovementRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    let movement = services::create_movement(db.pool(), &principal, &req).await?;

    Ok((StatusCode::CREATED, Json(movement)).into_response())
}

#[utoipa::path(
    put,
    path = "/movements/{id}/",
    params(
        ("id" = i32, Path, description = "Movement id")
    ),
    request_body = UpdateMovementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement updated", body = MovementResponse),
        (status = 400, description = "Validation error, duplicate name or unknown reference"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn update_movement(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateMovementRequest>, WebError>,
) -> Result<Response, WebError> {
    let existing = services::get_movement(db.pool(), id).await?;
    Resource::Movement.authorize(&principal, Action::Write, &existing)?;
    req.validate()?;

    let updated = services::update_movement(db.pool(), &existing, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/movements/{id}/",
    params(
        ("id" = i32, Path, description = "Movement id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Movement deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn delete_movement(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let existing = services::get_movement(db.pool(), id).await?;
    Resource::Movement.authorize(&principal, Action::Write, &existing)?;

    services::delete_movement(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
