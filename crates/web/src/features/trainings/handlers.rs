use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest},
    error::StorageError,
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/trainings/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Trainings of the caller (all trainings for admins)", body = Vec<TrainingResponse>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "trainings"
)]
pub async fn list_trainings(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
) -> Result<Response, WebError> {
    let trainings = services::list_trainings(db.pool(), &principal).await?;

    Ok(Json(trainings).into_response())
}

#[utoipa::path(
    get,
    path = "/trainings/{id}/",
    params(
        ("id" = i32, Path, description = "Training id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Training with its exercise", body = TrainingResponse),
        (status = 403, description = "Only the founder or an admin may read"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn get_training(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let training = services::get_training(db.pool(), id).await?;
    Resource::Training.authorize(&principal, Action::Read, &training)?;

    let training = services::load_training(db.pool(), training).await?;

    Ok(Json(training).into_response())
}

#[utoipa::path(
    post,
    path = "/trainings/",
    request_body = CreateTrainingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Training created", body = TrainingResponse),
        (status = 400, description = "Validation error or unknown exercise"),
        (status = 403, description = "Exercise is not readable by the caller")
    ),
    tag = "trainings"
)]
pub async fn create_training(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateTrainingRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    if let Some(exercise_id) = req.exercise_id() {
        let exercise = match services::get_exercise(db.pool(), exercise_id).await {
            Err(StorageError::NotFound) => {
                return Err(WebError::BadRequest(format!(
                    "Invalid exercise id {exercise_id}"
                )));
            }
            result => result?,
        };
        Resource::Exercise.authorize(&principal, Action::Read, &exercise)?;
    }

    let training = services::create_training(db.pool(), &principal, &req).await?;

    Ok((StatusCode::CREATED, Json(training)).into_response())
}

/// The linked exercise cannot be changed here; an `exercise` in the body is
/// ignored.
#[utoipa::path(
    put,
    path = "/trainings/{id}/",
    params(
        ("id" = i32, Path, description = "Training id")
    ),
    request_body = UpdateTrainingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Training updated", body = TrainingResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Only the founder or an admin may modify"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn update_training(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateTrainingRequest>, WebError>,
) -> Result<Response, WebError> {
    let existing = services::get_training(db.pool(), id).await?;
    Resource::Training.authorize(&principal, Action::Write, &existing)?;
    req.validate()?;

    let updated = services::update_training(db.pool(), &existing, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/trainings/{id}/",
    params(
        ("id" = i32, Path, description = "Training id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 403, description = "Only the founder or an admin may delete"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn delete_training(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let existing = services::get_training(db.pool(), id).await?;
    Resource::Training.authorize(&principal, Action::Write, &existing)?;

    services::delete_training(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
