use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{MovementSetting, SETTING_NAMES};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovementSettingResponse {
    pub id: i32,
    pub name: String,
    pub founder: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovementSettingRequest {
    #[validate(custom(function = "validate_setting_name"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMovementSettingRequest {
    #[validate(custom(function = "validate_setting_name"))]
    pub name: Option<String>,
}

fn validate_setting_name(name: &str) -> Result<(), ValidationError> {
    if SETTING_NAMES.contains(&name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_setting_name").with_message(
            format!("must be one of: {}", SETTING_NAMES.join(", ")).into(),
        ))
    }
}

impl From<MovementSetting> for MovementSettingResponse {
    fn from(setting: MovementSetting) -> Self {
        Self {
            id: setting.setting_id,
            name: setting.name,
            founder: setting.founder_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_setting_name_is_accepted() {
        for name in SETTING_NAMES {
            let req = CreateMovementSettingRequest {
                name: name.to_string(),
            };
            assert!(req.validate().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_unknown_setting_name_is_rejected() {
        let req = CreateMovementSettingRequest {
            name: "speed".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_update_without_name_is_valid() {
        let req = UpdateMovementSettingRequest { name: None };
        assert!(req.validate().is_ok());

        let req = UpdateMovementSettingRequest {
            name: Some("Weight".to_string()),
        };
        assert!(req.validate().is_err());
    }
}
