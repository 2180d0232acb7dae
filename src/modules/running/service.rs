use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use crate::modules::sessions::model::DateRangeParams;

use super::model::{CreateRunningSessionDto, RunningSession, UpdateRunningSessionDto};

const RUNNING_COLUMNS: &str = "id, user_id, date, duration_min, distance_km, elevation_gain_m, \
     average_pace_min_km, average_heart_rate, max_heart_rate, session_type, location, comments, \
     rpe, created_at, updated_at";

pub struct RunningService;

impl RunningService {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        range: &DateRangeParams,
    ) -> Result<Vec<RunningSession>, AppError> {
        sqlx::query_as::<_, RunningSession>(&format!(
            "SELECT {RUNNING_COLUMNS} FROM running_sessions \
             WHERE user_id = $1 \
               AND ($2::date IS NULL OR date >= $2) \
               AND ($3::date IS NULL OR date <= $3) \
             ORDER BY date DESC LIMIT $4 OFFSET $5"
        ))
        .bind(user_id)
        .bind(range.date_from)
        .bind(range.date_to)
        .bind(range.pagination.limit())
        .bind(range.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to list running sessions")
        .map_err(AppError::database)
    }

    pub async fn get(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<RunningSession, AppError> {
        sqlx::query_as::<_, RunningSession>(&format!(
            "SELECT {RUNNING_COLUMNS} FROM running_sessions WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch running session")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Running session not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateRunningSessionDto,
    ) -> Result<RunningSession, AppError> {
        sqlx::query_as::<_, RunningSession>(&format!(
            "INSERT INTO running_sessions \
                 (user_id, date, duration_min, distance_km, elevation_gain_m, \
                  average_pace_min_km, average_heart_rate, max_heart_rate, session_type, \
                  location, comments, rpe) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {RUNNING_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.date)
        .bind(dto.duration_min)
        .bind(dto.distance_km)
        .bind(dto.elevation_gain_m)
        .bind(dto.average_pace_min_km)
        .bind(dto.average_heart_rate)
        .bind(dto.max_heart_rate)
        .bind(&dto.session_type)
        .bind(&dto.location)
        .bind(&dto.comments)
        .bind(dto.rpe)
        .fetch_one(db)
        .await
        .context("Failed to insert running session")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdateRunningSessionDto,
    ) -> Result<RunningSession, AppError> {
        sqlx::query_as::<_, RunningSession>(&format!(
            "UPDATE running_sessions SET \
                 date = COALESCE($3, date), \
                 duration_min = COALESCE($4, duration_min), \
                 distance_km = COALESCE($5, distance_km), \
                 elevation_gain_m = COALESCE($6, elevation_gain_m), \
                 average_pace_min_km = COALESCE($7, average_pace_min_km), \
                 average_heart_rate = COALESCE($8, average_heart_rate), \
                 max_heart_rate = COALESCE($9, max_heart_rate), \
                 session_type = COALESCE($10, session_type), \
                 location = COALESCE($11, location), \
                 comments = COALESCE($12, comments), \
                 rpe = COALESCE($13, rpe), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {RUNNING_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.date)
        .bind(dto.duration_min)
        .bind(dto.distance_km)
        .bind(dto.elevation_gain_m)
        .bind(dto.average_pace_min_km)
        .bind(dto.average_heart_rate)
        .bind(dto.max_heart_rate)
        .bind(&dto.session_type)
        .bind(&dto.location)
        .bind(&dto.comments)
        .bind(dto.rpe)
        .fetch_optional(db)
        .await
        .context("Failed to update running session")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Running session not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM running_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete running session")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Running session not found"
            )));
        }

        Ok(())
    }
}
