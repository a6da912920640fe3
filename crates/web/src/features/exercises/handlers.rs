use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::exercise::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest},
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/exercises/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises visible to the caller, with their movements", body = Vec<ExerciseResponse>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(db.pool(), &principal).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{id}/",
    params(
        ("id" = i32, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise with its movements and settings", body = ExerciseResponse),
        (status = 403, description = "Exercise is neither default nor owned by the caller"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.pool(), id).await?;
    Resource::Exercise.authorize(&principal, Action::Read, &exercise)?;

    let tree = services::load_exercise(db.pool(), exercise).await?;

    Ok(Json(tree).into_response())
}

/// The nested movements are stored, but the response lists none of them;
/// fetch the exercise again to see the full tree.
#[utoipa::path(
    post,
    path = "/exercises/",
    request_body = CreateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise created", body = ExerciseResponse),
        (status = 400, description = "Validation error or unknown movement/setting"),
        (status = 403, description = "Not authenticated")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateExerciseRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::create_exercise(db.pool(), &principal, &req).await?;

    Ok((StatusCode::CREATED, Json(exercise)).into_response())
}

#[utoipa::path(
    put,
    path = "/exercises/{id}/",
    params(
        ("id" = i32, Path, description = "Exercise id")
    ),
    request_body = UpdateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise updated", body = ExerciseResponse),
        (status = 400, description = "Validation error or unknown movement/setting"),
        (status = 403, description = "Only the founder or an admin may modify"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateExerciseRequest>, WebError>,
) -> Result<Response, WebError> {
    let existing = services::get_exercise(db.pool(), id).await?;
    Resource::Exercise.authorize(&principal, Action::Write, &existing)?;
    req.validate()?;

    let updated = services::update_exercise(db.pool(), &existing, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/exercises/{id}/",
    params(
        ("id" = i32, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Exercise deleted with its movements"),
        (status = 403, description = "Only the founder or an admin may delete"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let existing = services::get_exercise(db.pool(), id).await?;
    Resource::Exercise.authorize(&principal, Action::Write, &existing)?;

    services::delete_exercise(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
