use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::equipments::handlers::list_equipments,
        features::equipments::handlers::get_equipment,
        features::equipments::handlers::create_equipment,
        features::equipments::handlers::update_equipment,
        features::equipments::handlers::delete_equipment,
        features::movement_settings::handlers::list_movement_settings,
        features::movement_settings::handlers::get_movement_setting,
        features::movement_settings::handlers::create_movement_setting,
        features::movement_settings::handlers::update_movement_setting,
        features::movement_settings::handlers::delete_movement_setting,
        features::movements::handlers::list_movements,
        features::movements::handlers::get_movement,
        features::movements::handlers::create_movement,
        features::movements::handlers::update_movement,
        features::movements::handlers::delete_movement,
        features::exercises::handlers::list_exercises,
        features::exercises::handlers::get_exercise,
        features::exercises::handlers::create_exercise,
        features::exercises::handlers::update_exercise,
        features::exercises::handlers::delete_exercise,
        features::trainings::handlers::list_trainings,
        features::trainings::handlers::get_training,
        features::trainings::handlers::create_training,
        features::trainings::handlers::update_training,
        features::trainings::handlers::delete_training,
        features::movements_per_exercise::handlers::list_exercise_movements,
        features::movements_per_exercise::handlers::create_exercise_movement,
    ),
    components(
        schemas(
            storage::dto::equipment::EquipmentResponse,
            storage::dto::equipment::CreateEquipmentRequest,
            storage::dto::equipment::UpdateEquipmentRequest,
            storage::dto::movement_setting::MovementSettingResponse,
            storage::dto::movement_setting::CreateMovementSettingRequest,
            storage::dto::movement_setting::UpdateMovementSettingRequest,
            storage::dto::movement::MovementResponse,
            storage::dto::movement::CreateMovementRequest,
            storage::dto::movement::UpdateMovementRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::dto::exercise::ExerciseMovementResponse,
            storage::dto::exercise::ExerciseMovementSettingResponse,
            storage::dto::exercise::ExerciseMovementEntry,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::ExerciseMovementInput,
            storage::dto::exercise::ExerciseMovementSettingInput,
            storage::dto::exercise::UpdateExerciseRequest,
            storage::dto::exercise::ExerciseMovementUpdate,
            storage::dto::exercise::CreateExerciseMovementRequest,
            storage::dto::training::TrainingResponse,
            storage::dto::training::ExerciseReference,
            storage::dto::training::CreateTrainingRequest,
            storage::dto::training::UpdateTrainingRequest,
        )
    ),
    tags(
        (name = "equipments", description = "Equipment catalog, writable by admins"),
        (name = "movement-settings", description = "Setting kinds a movement can be parameterized by"),
        (name = "movements", description = "Movement catalog with allowed settings"),
        (name = "exercises", description = "Exercises with their ordered movements"),
        (name = "trainings", description = "Logged trainings, private to their founder"),
        (name = "movements-per-exercise", description = "Movement rows across all exercises"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/equipments/",
            "/equipments/{id}/",
            "/movement-settings/",
            "/movements/{id}/",
            "/exercises/",
            "/trainings/{id}/",
            "/movements-per-exercise/",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
