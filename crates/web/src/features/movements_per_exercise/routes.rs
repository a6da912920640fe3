use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{create_exercise_movement, list_exercise_movements};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route(
            "/movements-per-exercise/",
            get(list_exercise_movements).post(create_exercise_movement),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::MovementsPerExercise),
            require_permission,
        ))
}
