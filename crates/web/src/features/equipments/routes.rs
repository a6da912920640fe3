use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_equipment, delete_equipment, get_equipment, list_equipments, update_equipment,
};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/equipments/", get(list_equipments).post(create_equipment))
        .route(
            "/equipments/:id/",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::Equipment),
            require_permission,
        ))
}
