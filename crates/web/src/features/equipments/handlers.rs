use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::equipment::{CreateEquipmentRequest, EquipmentResponse, UpdateEquipmentRequest},
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/equipments/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all equipment", body = Vec<EquipmentResponse>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "equipments"
)]
pub async fn list_equipments(State(db): State<Database>) -> Result<Response, WebError> {
    let equipments = services::list_equipments(db.pool()).await?;

    let response: Vec<EquipmentResponse> = equipments
        .into_iter()
        .map(EquipmentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/equipments/{id}/",
    params(
        ("id" = i32, Path, description = "Equipment id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Equipment found", body = EquipmentResponse),
        (status = 403, description = "Not authenticated"),
        (status = 404, description = "Equipment not found")
    ),
    tag = "equipments"
)]
pub async fn get_equipment(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let equipment = services::get_equipment(db.pool(), id).await?;
    Resource::Equipment.authorize(&principal, Action::Read, &equipment)?;

    Ok(Json(EquipmentResponse::from(equipment)).into_response())
}

#[utoipa::path(
    post,
    path = "/equipments/",
    request_body = CreateEquipmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Equipment created", body = EquipmentResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 403, description = "Admin only")
    ),
    tag = "equipments"
)]
pub async fn create_equipment(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateEquipmentRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    let equipment = services::create_equipment(db.pool(), &principal, &req).await?;

    Ok((StatusCode::CREATED, Json(EquipmentResponse::from(equipment))).into_response())
}

#[utoipa::path(
    put,
    path = "/equipments/{id}/",
    params(
        ("id" = i32, Path, description = "Equipment id")
    ),
    request_body = UpdateEquipmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Equipment not found")
    ),
    tag = "equipments"
)]
pub async fn update_equipment(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateEquipmentRequest>, WebError>,
) -> Result<Response, WebError> {
    let existing = services::get_equipment(db.pool(), id).await?;
    Resource::Equipment.authorize(&principal, Action::Write, &existing)?;
    req.validate()?;

    let updated = services::update_equipment(db.pool(), &existing, &req).await?;

    Ok(Json(EquipmentResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/equipments/{id}/",
    params(
        ("id" = i32, Path, description = "Equipment id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Equipment not found")
    ),
    tag = "equipments"
)]
pub async fn delete_equipment(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let existing = services::get_equipment(db.pool(), id).await?;
    Resource::Equipment.authorize(&principal, Action::Write, &existing)?;

    services::delete_equipment(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
