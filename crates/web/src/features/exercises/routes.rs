use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, update_exercise,
};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/exercises/", get(list_exercises).post(create_exercise))
        .route(
            "/exercises/:id/",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::Exercise),
            require_permission,
        ))
}
