use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use super::model::{CreateExerciseDto, Exercise, ExerciseFilterParams, UpdateExerciseDto};

const EXERCISE_COLUMNS: &str = "id, user_id, name, type, duration_min, description, \
     intensity, focus, created_at, updated_at";

pub struct ExerciseService;

impl ExerciseService {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        filter: &ExerciseFilterParams,
    ) -> Result<Vec<Exercise>, AppError> {
        sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises \
             WHERE user_id = $1 AND ($2::exercise_type IS NULL OR type = $2) \
             ORDER BY name LIMIT $3 OFFSET $4"
        ))
        .bind(user_id)
        .bind(filter.exercise_type)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to list exercises")
        .map_err(AppError::database)
    }

    pub async fn get(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch exercise")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Exercise not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateExerciseDto,
    ) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(&format!(
            "INSERT INTO exercises (user_id, name, type, duration_min, description, intensity, focus) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {EXERCISE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.name)
        .bind(dto.exercise_type)
        .bind(dto.duration_min)
        .bind(&dto.description)
        .bind(dto.intensity)
        .bind(&dto.focus)
        .fetch_one(db)
        .await
        .context("Failed to insert exercise")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdateExerciseDto,
    ) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(&format!(
            "UPDATE exercises SET \
                 name = COALESCE($3, name), \
                 type = COALESCE($4, type), \
                 duration_min = COALESCE($5, duration_min), \
                 description = COALESCE($6, description), \
                 intensity = COALESCE($7, intensity), \
                 focus = COALESCE($8, focus), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {EXERCISE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(&dto.name)
        .bind(dto.exercise_type)
        .bind(dto.duration_min)
        .bind(&dto.description)
        .bind(dto.intensity)
        .bind(&dto.focus)
        .fetch_optional(db)
        .await
        .context("Failed to update exercise")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Exercise not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete exercise")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Exercise not found")));
        }

        Ok(())
    }
}
