pub mod exercise_aggregate;
pub mod positional_merge;
pub mod training;
