pub mod equipment;
pub mod exercise;
pub mod exercise_movement;
pub mod movement;
pub mod movement_setting;
pub mod training;
pub mod user;

pub use equipment::Equipment;
pub use exercise::{EXERCISE_TYPES, Exercise};
pub use exercise_movement::{ExerciseMovement, ExerciseMovementSetting};
pub use movement::Movement;
pub use movement_setting::{MovementSetting, SETTING_NAMES};
pub use training::Training;
pub use user::{Principal, User};
