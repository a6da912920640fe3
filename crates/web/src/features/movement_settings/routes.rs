use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    create_movement_setting, delete_movement_setting, get_movement_setting,
    list_movement_settings, update_movement_setting,
};
use crate::middleware::auth::{AuthState, require_permission};
use crate::policy::Resource;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route(
            "/movement-settings/",
            get(list_movement_settings).post(create_movement_setting),
        )
        .route(
            "/movement-settings/:id/",
            get(get_movement_setting)
                .put(update_movement_setting)
                .delete(delete_movement_setting),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::new(db, Resource::MovementSetting),
            require_permission,
        ))
}
