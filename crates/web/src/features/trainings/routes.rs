use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_training, delete_training, get_training, list_trainings, update_training,
};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/trainings/", get(list_trainings).post(create_training))
        .route(
            "/trainings/:id/",
            get(get_training).put(update_training).delete(delete_training),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::Training),
            require_permission,
        ))
}
