pub mod equipments;
pub mod exercises;
pub mod movement_settings;
pub mod movements;
pub mod movements_per_exercise;
pub mod trainings;
