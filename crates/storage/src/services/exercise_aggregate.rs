//! Create, update and read paths for the exercise aggregate: an exercise, its
//! ordered movement rows and the setting values of each movement row.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};

use super::positional_merge::pair_by_position;
use crate::dto::exercise::{
    CreateExerciseRequest, ExerciseMovementEntry, ExerciseMovementInput,
    ExerciseMovementResponse, ExerciseMovementSettingResponse, ExerciseMovementUpdate,
    ExerciseResponse, UpdateExerciseRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, ExerciseMovement, ExerciseMovementSetting, Principal};
use crate::repository::exercise::{ExerciseFields, ExerciseRepository};

/// Create an exercise with all its nested movements and settings.
///
/// Everything is written in one transaction: an unknown movement or setting
/// id rolls back the exercise too. `is_default` is taken from the founder's
/// admin capability, never from the request.
///
/// The returned tree always has an empty `movements` list; the children are
/// persisted but only reported by the read path.
pub async fn create_exercise(
    pool: &PgPool,
    founder: &Principal,
    req: &CreateExerciseRequest,
) -> Result<ExerciseResponse> {
    let mut tx = pool.begin().await?;

    let exercise =
        ExerciseRepository::insert(&mut *tx, req, founder.user_id, founder.is_admin).await?;

    for entry in &req.movements {
        insert_movement(&mut *tx, exercise.exercise_id, entry).await?;
    }

    tx.commit().await?;

    tracing::info!(
        exercise_id = exercise.exercise_id,
        founder_id = founder.user_id,
        is_default = exercise.is_default,
        movements = req.movements.len(),
        "Exercise created"
    );

    Ok(ExerciseResponse::new(exercise, Vec::new()))
}

/// Attach one more movement (with its settings) to an existing exercise
pub async fn add_movement(
    pool: &PgPool,
    exercise_id: i32,
    entry: &ExerciseMovementInput,
) -> Result<ExerciseMovementEntry> {
    let mut tx = pool.begin().await?;
    let movement = insert_movement(&mut *tx, exercise_id, entry).await?;
    tx.commit().await?;

    Ok(ExerciseMovementEntry {
        exercise: exercise_id,
        movement,
    })
}

/// Update an exercise and return the refreshed tree.
///
/// Flat fields present in `req` overwrite the stored ones. A `movements`
/// list is merged into the stored movement rows by position, and each
/// entry's `movement_settings` into that row's settings the same way (see
/// [`pair_by_position`]). The whole update runs in one transaction.
pub async fn update_exercise(
    pool: &PgPool,
    existing: &Exercise,
    req: &UpdateExerciseRequest,
) -> Result<ExerciseResponse> {
    let fields = ExerciseFields {
        name: req.name.as_deref().unwrap_or(&existing.name),
        description: req.description.as_deref().unwrap_or(&existing.description),
        exercise_type: req
            .exercise_type
            .as_deref()
            .unwrap_or(&existing.exercise_type),
        goal_type: req.goal_type.as_deref().unwrap_or(&existing.goal_type),
        goal_value: req.goal_value.unwrap_or(existing.goal_value),
    };

    let mut tx = pool.begin().await?;

    let exercise = ExerciseRepository::update_fields(&mut *tx, existing.exercise_id, &fields).await?;

    if let Some(movements) = &req.movements {
        merge_movements(&mut *tx, exercise.exercise_id, movements).await?;
    }

    tx.commit().await?;

    tracing::info!(exercise_id = exercise.exercise_id, "Exercise updated");

    load_exercise(pool, exercise).await
}

/// Build the full tree of one exercise
pub async fn load_exercise(pool: &PgPool, exercise: Exercise) -> Result<ExerciseResponse> {
    load_exercises(pool, vec![exercise])
        .await?
        .pop()
        .ok_or(StorageError::NotFound)
}

/// Build the trees of several exercises with one query per level
pub async fn load_exercises(
    pool: &PgPool,
    exercises: Vec<Exercise>,
) -> Result<Vec<ExerciseResponse>> {
    let exercise_ids: Vec<i32> = exercises.iter().map(|e| e.exercise_id).collect();
    let movements = ExerciseRepository::movements_of(pool, &exercise_ids).await?;

    let movement_ids: Vec<i32> = movements.iter().map(|m| m.exercise_movement_id).collect();
    let settings = ExerciseRepository::settings_of(pool, &movement_ids).await?;

    Ok(assemble_trees(exercises, movements, settings))
}

/// Exercise-movement rows with their settings, for every exercise the
/// principal may read
pub async fn list_exercise_movements(
    pool: &PgPool,
    principal: &Principal,
) -> Result<Vec<ExerciseMovementEntry>> {
    let rows = ExerciseRepository::new(pool)
        .list_movements_visible_to(principal)
        .await?;

    let movement_ids: Vec<i32> = rows.iter().map(|m| m.exercise_movement_id).collect();
    let mut settings = group_settings(ExerciseRepository::settings_of(pool, &movement_ids).await?);

    Ok(rows
        .into_iter()
        .map(|row| {
            let exercise = row.exercise_id;
            let row_settings = settings.remove(&row.exercise_movement_id).unwrap_or_default();
            ExerciseMovementEntry {
                exercise,
                movement: ExerciseMovementResponse::new(row, row_settings),
            }
        })
        .collect())
}

async fn insert_movement(
    conn: &mut PgConnection,
    exercise_id: i32,
    entry: &ExerciseMovementInput,
) -> Result<ExerciseMovementResponse> {
    let row = ExerciseRepository::insert_movement(
        &mut *conn,
        exercise_id,
        entry.movement,
        entry.movement_number,
    )
    .await?;

    let mut settings = Vec::with_capacity(entry.movement_settings.len());
    for setting in &entry.movement_settings {
        let stored = ExerciseRepository::insert_setting(
            &mut *conn,
            row.exercise_movement_id,
            setting.setting,
            setting.setting_value,
        )
        .await?;
        settings.push(ExerciseMovementSettingResponse::from(stored));
    }

    Ok(ExerciseMovementResponse::new(row, settings))
}

async fn merge_movements(
    conn: &mut PgConnection,
    exercise_id: i32,
    incoming: &[ExerciseMovementUpdate],
) -> Result<()> {
    let stored = ExerciseRepository::movements_of(&mut *conn, &[exercise_id]).await?;

    if stored.len() != incoming.len() {
        tracing::debug!(
            exercise_id,
            stored = stored.len(),
            incoming = incoming.len(),
            "Movement counts differ, unmatched entries are ignored"
        );
    }

    for (row, entry) in pair_by_position(stored, incoming) {
        ExerciseRepository::overwrite_movement(
            &mut *conn,
            row.exercise_movement_id,
            entry.movement,
            entry.movement_number,
        )
        .await?;

        let Some(settings) = &entry.movement_settings else {
            continue;
        };

        let stored_settings =
            ExerciseRepository::settings_of(&mut *conn, &[row.exercise_movement_id]).await?;

        for (setting_row, setting) in pair_by_position(stored_settings, settings) {
            ExerciseRepository::overwrite_setting(
                &mut *conn,
                setting_row.exercise_movement_setting_id,
                setting.setting,
                setting.setting_value,
            )
            .await?;
        }
    }

    Ok(())
}

fn group_settings(
    settings: Vec<ExerciseMovementSetting>,
) -> HashMap<i32, Vec<ExerciseMovementSettingResponse>> {
    let mut grouped: HashMap<i32, Vec<ExerciseMovementSettingResponse>> = HashMap::new();
    for setting in settings {
        grouped
            .entry(setting.exercise_movement_id)
            .or_default()
            .push(setting.into());
    }
    grouped
}

/// Nest movement rows under their exercise and settings under their movement
/// row, keeping the storage order of every level.
pub fn assemble_trees(
    exercises: Vec<Exercise>,
    movements: Vec<ExerciseMovement>,
    settings: Vec<ExerciseMovementSetting>,
) -> Vec<ExerciseResponse> {
    let mut settings = group_settings(settings);

    let mut by_exercise: HashMap<i32, Vec<ExerciseMovementResponse>> = HashMap::new();
    for row in movements {
        let row_settings = settings.remove(&row.exercise_movement_id).unwrap_or_default();
        by_exercise
            .entry(row.exercise_id)
            .or_default()
            .push(ExerciseMovementResponse::new(row, row_settings));
    }

    exercises
        .into_iter()
        .map(|exercise| {
            let movements = by_exercise.remove(&exercise.exercise_id).unwrap_or_default();
            ExerciseResponse::new(exercise, movements)
        })
        .collect()
}
