pub mod equipment;
pub mod exercise;
pub mod movement;
pub mod movement_setting;
pub mod training;
pub mod user;
