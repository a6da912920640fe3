//! Equipment, movement setting and movement endpoints.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::Fixture;

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_any_user_reads_catalog(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, body) = fx
        .send(Method::GET, "/equipments/", Some(&fx.other), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": fx.kettlebell, "name": "kettlebell", "founder": fx.admin.user_id}])
    );

    let (status, body) = fx
        .send(Method::GET, "/movement-settings/", Some(&fx.other), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let uri = format!("/movements/{}/", fx.squat);
    let (status, body) = fx.send(Method::GET, &uri, Some(&fx.other), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment"], fx.kettlebell);
    assert_eq!(body["settings"], json!([fx.repetitions, fx.weight]));
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_only_admin_writes_catalog(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, _) = fx
        .send(
            Method::POST,
            "/equipments/",
            Some(&fx.user),
            Some(json!({"name": "barbell"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/movements/{}/", fx.squat);
    let (status, _) = fx.send(Method::DELETE, &uri, Some(&fx.user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(fx.count("movements").await, 1);

    let (status, body) = fx
        .send(
            Method::POST,
            "/equipments/",
            Some(&fx.admin),
            Some(json!({"name": "barbell"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["founder"], fx.admin.user_id);
    assert_eq!(fx.count("equipments").await, 2);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_duplicate_equipment_name_is_rejected(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, _) = fx
        .send(
            Method::POST,
            "/equipments/",
            Some(&fx.admin),
            Some(json!({"name": "kettlebell"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fx.count("equipments").await, 1);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_movement_setting_names_are_restricted(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, body) = fx
        .send(
            Method::POST,
            "/movement-settings/",
            Some(&fx.admin),
            Some(json!({"name": "speed"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (status, _) = fx
        .send(
            Method::POST,
            "/movement-settings/",
            Some(&fx.admin),
            Some(json!({"name": "repetitions"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = fx
        .send(
            Method::POST,
            "/movement-settings/",
            Some(&fx.admin),
            Some(json!({"name": "distance"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "distance");
    assert_eq!(fx.count("movement_settings").await, 3);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_movement_create_and_update(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, created) = fx
        .send(
            Method::POST,
            "/movements/",
            Some(&fx.admin),
            Some(json!({"name": "burpee", "settings": [fx.repetitions]})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["equipment"], serde_json::Value::Null);
    assert_eq!(created["settings"], json!([fx.repetitions]));

    let uri = format!("/movements/{}/", created["id"]);
    let (status, updated) = fx
        .send(
            Method::PUT,
            &uri,
            Some(&fx.admin),
            Some(json!({"equipment": fx.kettlebell, "settings": [fx.weight, fx.repetitions]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "burpee");
    assert_eq!(updated["equipment"], fx.kettlebell);
    assert_eq!(updated["settings"], json!([fx.weight, fx.repetitions]));

    let (status, updated) = fx
        .send(Method::PUT, &uri, Some(&fx.admin), Some(json!({"equipment": null})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["equipment"], serde_json::Value::Null);
    assert_eq!(updated["settings"], json!([fx.weight, fx.repetitions]));
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_movement_with_unknown_setting_is_rejected(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, _) = fx
        .send(
            Method::POST,
            "/movements/",
            Some(&fx.admin),
            Some(json!({"name": "lunge", "settings": [fx.repetitions, 9999]})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fx.count("movements").await, 1);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_admin_deletes_movement(pool: PgPool) {
    let fx = Fixture::seed(pool).await;
    let uri = format!("/movements/{}/", fx.squat);

    let (status, _) = fx.send(Method::DELETE, &uri, Some(&fx.admin), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(fx.count("movements").await, 0);
    assert_eq!(fx.count("exercise_movements").await, 0);

    let (status, _) = fx.send(Method::GET, &uri, Some(&fx.admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_deleting_equipment_detaches_movements(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let uri = format!("/equipments/{}/", fx.kettlebell);
    let (status, _) = fx.send(Method::DELETE, &uri, Some(&fx.admin), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let uri = format!("/movements/{}/", fx.squat);
    let (_, movement) = fx.send(Method::GET, &uri, Some(&fx.user), None).await;
    assert_eq!(movement["equipment"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn test_mistyped_body_is_bad_request(pool: PgPool) {
    let fx = Fixture::seed(pool).await;

    let (status, body) = fx
        .send(
            Method::POST,
            "/movement-settings/",
            Some(&fx.admin),
            Some(json!({"name": 5})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let uri = format!("/movements/{}/", fx.squat);
    let (status, _) = fx
        .send(
            Method::PUT,
            &uri,
            Some(&fx.admin),
            Some(json!({"settings": "repetitions"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fx.count("movement_settings").await, 2);
}
