#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use sqlx::PgPool;
use storage::{
    Database,
    dto::{
        equipment::CreateEquipmentRequest,
        exercise::CreateExerciseRequest,
        movement::CreateMovementRequest,
        movement_setting::CreateMovementSettingRequest,
        training::{CreateTrainingRequest, ExerciseReference},
    },
    models::{Principal, User},
    repository::{
        equipment::EquipmentRepository, movement::MovementRepository,
        movement_setting::MovementSettingRepository, training::TrainingRepository,
        user::UserRepository,
    },
    services::exercise_aggregate,
};
use uuid::Uuid;

/// Users plus a small catalog shared by the API tests.
///
/// `connie` is a private exercise of `user` with one squat row carrying a
/// repetitions and a weight value. `chelsea` is a default exercise made by
/// `admin`. `training` is a training of `user` logged against `connie`.
pub struct Fixture {
    pub app: Router,
    pub pool: PgPool,
    pub admin: User,
    pub user: User,
    pub other: User,
    pub kettlebell: i32,
    pub squat: i32,
    pub repetitions: i32,
    pub weight: i32,
    pub connie: i32,
    pub chelsea: i32,
    pub training: i32,
}

impl Fixture {
    pub async fn seed(pool: PgPool) -> Self {
        let users = UserRepository::new(&pool);
        let admin = users.create("admin", true).await.unwrap();
        let user = users.create("athlete", false).await.unwrap();
        let other = users.create("stranger", false).await.unwrap();

        let kettlebell = EquipmentRepository::new(&pool)
            .create(
                &CreateEquipmentRequest {
                    name: "kettlebell".to_string(),
                },
                admin.user_id,
            )
            .await
            .unwrap()
            .equipment_id;

        let settings = MovementSettingRepository::new(&pool);
        let repetitions = settings
            .create(
                &CreateMovementSettingRequest {
                    name: "repetitions".to_string(),
                },
                admin.user_id,
            )
            .await
            .unwrap()
            .setting_id;
        let weight = settings
            .create(
                &CreateMovementSettingRequest {
                    name: "weight".to_string(),
                },
                admin.user_id,
            )
            .await
            .unwrap()
            .setting_id;

        let squat = MovementRepository::new(&pool)
            .create(
                &CreateMovementRequest {
                    name: "squat".to_string(),
                    equipment: Some(kettlebell),
                    settings: vec![repetitions, weight],
                },
                admin.user_id,
            )
            .await
            .unwrap()
            .id;

        let connie: CreateExerciseRequest = serde_json::from_value(json!({
            "name": "connie",
            "exercise_type": "FORTIME",
            "goal_type": "round",
            "goal_value": 5,
            "movements": [{
                "movement": squat,
                "movement_number": 1,
                "movement_settings": [
                    {"setting": repetitions, "setting_value": 10},
                    {"setting": weight, "setting_value": 20}
                ]
            }]
        }))
        .unwrap();
        let connie = exercise_aggregate::create_exercise(&pool, &Principal::from(&user), &connie)
            .await
            .unwrap()
            .id;

        let chelsea: CreateExerciseRequest = serde_json::from_value(json!({
            "name": "chelsea",
            "exercise_type": "EMOM",
            "goal_type": "duration",
            "goal_value": 30
        }))
        .unwrap();
        let chelsea = exercise_aggregate::create_exercise(&pool, &Principal::from(&admin), &chelsea)
            .await
            .unwrap()
            .id;

        let training = TrainingRepository::new(&pool)
            .create(
                &CreateTrainingRequest {
                    date: "2024-05-01".parse().unwrap(),
                    performance_type: "time".to_string(),
                    performance_value: 540,
                    done: true,
                    exercise: Some(ExerciseReference { id: Some(connie) }),
                },
                user.user_id,
            )
            .await
            .unwrap()
            .training_id;

        Self {
            app: web::app(Database::from_pool(pool.clone())),
            pool,
            admin,
            user,
            other,
            kettlebell,
            squat,
            repetitions,
            weight,
            connie,
            chelsea,
            training,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&User>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.app, method, uri, user.map(|u| u.api_key), body).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

/// Run one request through the router and decode the JSON body, if any.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    api_key: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(key) = api_key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {key}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = tower::ServiceExt::oneshot(app.clone(), request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
