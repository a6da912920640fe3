use axum::Router;
use storage::Database;

use crate::features;

/// All resource routes, each behind its own permission layer
pub fn router(db: Database) -> Router {
    Router::new()
        .merge(features::equipments::routes::routes(db.clone()))
        .merge(features::movement_settings::routes::routes(db.clone()))
        .merge(features::movements::routes::routes(db.clone()))
        .merge(features::exercises::routes::routes(db.clone()))
        .merge(features::trainings::routes::routes(db.clone()))
        .merge(features::movements_per_exercise::routes::routes(db.clone()))
        .with_state(db)
}
