use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use storage::{
    Database,
    dto::exercise::{CreateExerciseMovementRequest, ExerciseMovementEntry},
    error::StorageError,
    models::Principal,
};
use validator::Validate;

use crate::error::WebError;
use crate::policy::{Action, Resource};

use super::services;

#[utoipa::path(
    get,
    path = "/movements-per-exercise/",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement rows of every exercise visible to the caller", body = Vec<ExerciseMovementEntry>),
        (status = 403, description = "Not authenticated")
    ),
    tag = "movements-per-exercise"
)]
pub async fn list_exercise_movements(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
) -> Result<Response, WebError> {
    let movements = services::list_movements(db.pool(), &principal).await?;

    Ok(Json(movements).into_response())
}

#[utoipa::path(
    post,
    path = "/movements-per-exercise/",
    request_body = CreateExerciseMovementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Movement added to the exercise", body = ExerciseMovementEntry),
        (status = 400, description = "Validation error or unknown exercise/movement/setting"),
        (status = 403, description = "Only the exercise founder or an admin may add movements")
    ),
    tag = "movements-per-exercise"
)]
pub async fn create_exercise_movement(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateExerciseMovementRequest>, WebError>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = match services::get_exercise(db.pool(), req.exercise).await {
        Err(StorageError::NotFound) => {
            return Err(WebError::BadRequest(format!(
                "Invalid exercise id {}",
                req.exercise
            )));
        }
        result => result?,
    };
    Resource::MovementsPerExercise.authorize(&principal, Action::Write, &exercise)?;

    let created = services::add_movement(db.pool(), &exercise, &req.movement).await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}
