use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::movement_setting::{
        CreateMovementSettingRequest, MovementSettingResponse, UpdateMovementSettingRequest,
    },
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/movement-settings/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all movement settings", body = Vec<MovementSettingResponse>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "movement-settings"
)]
pub async fn list_movement_settings(State(db): State<Database>) -> Result<Response, WebError> {
    let settings = services::list_movement_settings(db.pool()).await?;

    let response: Vec<MovementSettingResponse> = settings
        .into_iter()
        .map(MovementSettingResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/movement-settings/{id}/",
    params(
        ("id" = i32, Path, description = "Movement setting id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement setting found", body = MovementSettingResponse),
        (status = 403, description = "Not authenticated"),
        (status = 404, description = "Movement setting not found")
    ),
    tag = "movement-settings"
)]
pub async fn get_movement_setting(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let setting = services::get_movement_setting(db.pool(), id).await?;
    Resource::MovementSetting.authorize(&principal, Action::Read, &setting)?;

    Ok(Json(MovementSettingResponse::from(setting)).into_response())
}

#[utoipa::path(
    post,
    path = "/movement-settings/",
    request_body = CreateMovementSettingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Movement setting created", body = MovementSettingResponse),
        (status = 400, description = "Validation error or name not allowed or already used"),
        (status = 403, description = "Admin only")
    ),
    tag = "movement-settings"
)]
pub async fn create_movement_setting(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateMovementSettingRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    let setting = services::create_movement_setting(db.pool(), &principal, &req).await?;

    Ok((StatusCode::CREATED, Json(MovementSettingResponse::from(setting))).into_response())
}

#[utoipa::path(
    put,
    path = "/movement-settings/{id}/",
    params(
        ("id" = i32, Path, description = "Movement setting id")
    ),
    request_body = UpdateMovementSettingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement setting updated", body = MovementSettingResponse),
        (status = 400, description = "Validation error or name not allowed or already used"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Movement setting not found")
    ),
    tag = "movement-settings"
)]
pub async fn update_movement_setting(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateMovementSettingRequest>, WebError>,
) -> Result<Response, WebError> {
    let existing = services::get_movement_setting(db.pool(), id).await?;
    Resource::MovementSetting.authorize(&principal, Action::Write, &existing)?;
    req.validate()?;

    let updated = services::update_movement_setting(db.pool(), &existing, &req).await?;

    Ok(Json(MovementSettingResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/movement-settings/{id}/",
    params(
        ("id" = i32, Path, description = "Movement setting id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Movement setting deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Movement setting not found")
    ),
    tag = "movement-settings"
)]
pub async fn delete_movement_setting(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let existing = services::get_movement_setting(db.pool(), id).await?;
    Resource::MovementSetting.authorize(&principal, Action::Write, &existing)?;

    services::delete_movement_setting(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
