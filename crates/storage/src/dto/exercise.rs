use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{EXERCISE_TYPES, Exercise, ExerciseMovement, ExerciseMovementSetting};

const SETTING_VALUE_SCALE: u32 = 2;
const SETTING_VALUE_LIMIT: i64 = 10_000_000_000;

/// Full exercise tree: the exercise, its movements in stored order, and the
/// setting values of each movement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub exercise_type: String,
    pub goal_type: String,
    pub goal_value: i32,
    pub founder: i32,
    pub is_default: bool,
    pub movements: Vec<ExerciseMovementResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseMovementResponse {
    pub id: i32,
    pub movement: i32,
    pub movement_number: i32,
    pub movement_settings: Vec<ExerciseMovementSettingResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseMovementSettingResponse {
    pub id: i32,
    pub setting: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub setting_value: Decimal,
}

/// Row of the flat `movements-per-exercise` listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseMovementEntry {
    pub exercise: i32,
    #[serde(flatten)]
    pub movement: ExerciseMovementResponse,
}

/// Request payload for creating an exercise with its nested movements.
///
/// `founder` and `is_default` are not read from the body: the founder is the
/// caller and `is_default` follows the caller's admin capability.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_exercise_type"))]
    pub exercise_type: String,

    #[validate(length(min = 1, max = 32))]
    pub goal_type: String,

    #[validate(range(min = 0))]
    pub goal_value: i32,

    #[serde(default)]
    #[validate(nested)]
    pub movements: Vec<ExerciseMovementInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseMovementInput {
    pub movement: i32,

    #[validate(range(min = 1, message = "movement_number starts at 1"))]
    pub movement_number: i32,

    #[serde(default, alias = "settings")]
    #[validate(nested)]
    pub movement_settings: Vec<ExerciseMovementSettingInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseMovementSettingInput {
    pub setting: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_setting_value"))]
    pub setting_value: Decimal,
}

/// Partial update of an exercise.
///
/// Flat fields overwrite the stored value only when present. When `movements`
/// is present, entries are applied to the stored movement rows by position;
/// see `services::positional_merge`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_exercise_type"))]
    pub exercise_type: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub goal_type: Option<String>,

    #[validate(range(min = 0))]
    pub goal_value: Option<i32>,

    #[validate(nested)]
    pub movements: Option<Vec<ExerciseMovementUpdate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseMovementUpdate {
    pub movement: i32,

    #[validate(range(min = 1, message = "movement_number starts at 1"))]
    pub movement_number: i32,

    #[serde(default, alias = "settings")]
    #[validate(nested)]
    pub movement_settings: Option<Vec<ExerciseMovementSettingInput>>,
}

/// Request payload for attaching one movement to an existing exercise.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseMovementRequest {
    pub exercise: i32,

    #[serde(flatten)]
    #[validate(nested)]
    pub movement: ExerciseMovementInput,
}

fn validate_exercise_type(exercise_type: &str) -> Result<(), ValidationError> {
    if EXERCISE_TYPES.contains(&exercise_type) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_exercise_type").with_message(
            format!("must be one of: {}", EXERCISE_TYPES.join(", ")).into(),
        ))
    }
}

/// Setting values are stored as NUMERIC(12, 2): at most ten integer digits and
/// two decimals. Anything wider is rejected rather than rounded.
fn validate_setting_value(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > SETTING_VALUE_SCALE {
        return Err(ValidationError::new("setting_value_scale").with_message(
            format!("at most {SETTING_VALUE_SCALE} decimal places are allowed").into(),
        ));
    }

    if value.abs() >= Decimal::from(SETTING_VALUE_LIMIT) {
        return Err(ValidationError::new("setting_value_range").with_message(
            format!("must be lower than {SETTING_VALUE_LIMIT} in absolute value").into(),
        ));
    }

    Ok(())
}

impl ExerciseResponse {
    pub fn new(exercise: Exercise, movements: Vec<ExerciseMovementResponse>) -> Self {
        Self {
            id: exercise.exercise_id,
            name: exercise.name,
            description: exercise.description,
            exercise_type: exercise.exercise_type,
            goal_type: exercise.goal_type,
            goal_value: exercise.goal_value,
            founder: exercise.founder_id,
            is_default: exercise.is_default,
            movements,
        }
    }
}

impl ExerciseMovementResponse {
    pub fn new(row: ExerciseMovement, settings: Vec<ExerciseMovementSettingResponse>) -> Self {
        Self {
            id: row.exercise_movement_id,
            movement: row.movement_id,
            movement_number: row.movement_number,
            movement_settings: settings,
        }
    }
}

impl From<ExerciseMovementSetting> for ExerciseMovementSettingResponse {
    fn from(row: ExerciseMovementSetting) -> Self {
        Self {
            id: row.exercise_movement_setting_id,
            setting: row.setting_id,
            setting_value: row.setting_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fran() -> serde_json::Value {
        json!({
            "name": "fran",
            "description": "21-15-9",
            "exercise_type": "FORTIME",
            "goal_type": "round",
            "goal_value": 3,
            "founder": 99,
            "is_default": true,
            "movements": [
                {
                    "movement": 1,
                    "movement_number": 1,
                    "movement_settings": [{"setting": 2, "setting_value": 21}]
                }
            ]
        })
    }

    #[test]
    fn test_create_request_ignores_founder_and_default_flag() {
        let req: CreateExerciseRequest = serde_json::from_value(fran()).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.movements.len(), 1);
        assert_eq!(
            req.movements[0].movement_settings[0].setting_value,
            Decimal::from(21)
        );
    }

    #[test]
    fn test_settings_alias_is_accepted() {
        let input: ExerciseMovementInput = serde_json::from_value(json!({
            "movement": 1,
            "movement_number": 2,
            "settings": [{"setting": 3, "setting_value": 12.5}]
        }))
        .unwrap();

        assert_eq!(input.movement_settings.len(), 1);
        assert_eq!(input.movement_settings[0].setting_value.to_string(), "12.5");
    }

    #[test]
    fn test_unknown_exercise_type_is_rejected() {
        let mut body = fran();
        body["exercise_type"] = json!("SPRINT");
        let req: CreateExerciseRequest = serde_json::from_value(body).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("exercise_type"));
    }

    #[test]
    fn test_nested_movement_number_must_be_positive() {
        let mut body = fran();
        body["movements"][0]["movement_number"] = json!(0);
        let req: CreateExerciseRequest = serde_json::from_value(body).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_setting_value_precision_and_range() {
        let setting = |value: serde_json::Value| -> ExerciseMovementSettingInput {
            serde_json::from_value(json!({"setting": 1, "setting_value": value})).unwrap()
        };

        assert!(setting(json!(12.34)).validate().is_ok());
        assert!(setting(json!(20.0)).validate().is_ok());
        assert!(setting(json!(9999999999.99)).validate().is_ok());

        let errors = setting(json!(12.345)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("setting_value"));
        assert!(setting(json!(100000000000.0)).validate().is_err());
        assert!(setting(json!(-10000000000i64)).validate().is_err());
    }

    #[test]
    fn test_nested_setting_value_is_validated() {
        let mut body = fran();
        body["movements"][0]["movement_settings"][0]["setting_value"] = json!(0.125);
        let req: CreateExerciseRequest = serde_json::from_value(body).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_distinguishes_missing_settings_from_empty() {
        let update: UpdateExerciseRequest = serde_json::from_value(json!({
            "goal_value": 5,
            "movements": [
                {"movement": 1, "movement_number": 1},
                {"movement": 2, "movement_number": 2, "movement_settings": []}
            ]
        }))
        .unwrap();

        assert!(update.validate().is_ok());
        assert_eq!(update.name, None);
        let movements = update.movements.unwrap();
        assert!(movements[0].movement_settings.is_none());
        assert!(movements[1].movement_settings.as_ref().is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_setting_value_serializes_as_number() {
        let setting = ExerciseMovementSettingResponse {
            id: 1,
            setting: 2,
            setting_value: Decimal::new(105, 1),
        };
        let value = serde_json::to_value(setting).unwrap();
        assert_eq!(value["setting_value"], json!(10.5));
    }

    #[test]
    fn test_entry_flattens_movement_fields() {
        let entry = ExerciseMovementEntry {
            exercise: 7,
            movement: ExerciseMovementResponse {
                id: 3,
                movement: 4,
                movement_number: 1,
                movement_settings: vec![],
            },
        };
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(
            value,
            json!({
                "exercise": 7,
                "id": 3,
                "movement": 4,
                "movement_number": 1,
                "movement_settings": []
            })
        );
    }
}
