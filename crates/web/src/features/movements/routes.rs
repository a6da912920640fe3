use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_movement, delete_movement, get_movement, list_movements, update_movement,
};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/movements/", get(list_movements).post(create_movement))
        .route(
            "/movements/:id/",
            get(get_movement).put(update_movement).delete(delete_movement),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::Movement),
            require_permission,
        ))
}
