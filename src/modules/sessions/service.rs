use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use super::model::{
    CreatePlanningDto, CreateSessionTemplateDto, CreateTrainingSessionDto, DateRangeParams,
    Planning, SessionTemplate, TrainingSession, UpdatePlanningDto,
};

const TEMPLATE_COLUMNS: &str = "id, user_id, name, type, duration_min, description, \
     exercises_json, created_at, updated_at";

const PLANNING_COLUMNS: &str = "id, user_id, date, time_slot, time_start, activity_type, \
     activity_id, title, description, completed, completed_at, notes, created_at, updated_at";

const TRAINING_COLUMNS: &str = "id, user_id, planning_id, date, duration_min, session_type, \
     location, routes_json, best_grade, best_style, rpe, fatigue, notes, created_at, updated_at";

pub struct SessionService;

impl SessionService {
    // --- Session templates ---

    pub async fn list_templates(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<SessionTemplate>, AppError> {
        sqlx::query_as::<_, SessionTemplate>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM session_templates WHERE user_id = $1 ORDER BY name"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to list session templates")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_template(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateSessionTemplateDto,
    ) -> Result<SessionTemplate, AppError> {
        let exercises_json = serde_json::to_string(&dto.exercise_ids)
            .context("Failed to serialize exercise ids")
            .map_err(AppError::internal)?;

        sqlx::query_as::<_, SessionTemplate>(&format!(
            "INSERT INTO session_templates (user_id, name, type, duration_min, description, exercises_json) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {TEMPLATE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.name)
        .bind(dto.session_type)
        .bind(dto.duration_min)
        .bind(&dto.description)
        .bind(&exercises_json)
        .fetch_one(db)
        .await
        .context("Failed to insert session template")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn delete_template(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM session_templates WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete session template")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Template not found")));
        }

        Ok(())
    }

    // --- Planning ---

    pub async fn list_planning(
        db: &PgPool,
        user_id: Uuid,
        range: &DateRangeParams,
    ) -> Result<Vec<Planning>, AppError> {
        sqlx::query_as::<_, Planning>(&format!(
            "SELECT {PLANNING_COLUMNS} FROM planning \
             WHERE user_id = $1 \
               AND ($2::date IS NULL OR date >= $2) \
               AND ($3::date IS NULL OR date <= $3) \
             ORDER BY date LIMIT $4 OFFSET $5"
        ))
        .bind(user_id)
        .bind(range.date_from)
        .bind(range.date_to)
        .bind(range.pagination.limit())
        .bind(range.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to list planning")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_planning(
        db: &PgPool,
        user_id: Uuid,
        dto: CreatePlanningDto,
    ) -> Result<Planning, AppError> {
        sqlx::query_as::<_, Planning>(&format!(
            "INSERT INTO planning (user_id, date, time_slot, activity_type, activity_id, title, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PLANNING_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.date)
        .bind(dto.time_slot)
        .bind(dto.activity_type)
        .bind(dto.activity_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .context("Failed to insert planning entry")
        .map_err(AppError::database)
    }

    /// Updates a planned activity. Marking it completed stamps
    /// `completed_at` once; later updates keep the original stamp.
    #[instrument(skip(db, dto))]
    pub async fn update_planning(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdatePlanningDto,
    ) -> Result<Planning, AppError> {
        sqlx::query_as::<_, Planning>(&format!(
            "UPDATE planning SET \
                 date = COALESCE($3, date), \
                 time_slot = COALESCE($4, time_slot), \
                 activity_type = COALESCE($5, activity_type), \
                 activity_id = COALESCE($6, activity_id), \
                 title = COALESCE($7, title), \
                 description = COALESCE($8, description), \
                 completed = COALESCE($9, completed), \
                 completed_at = CASE \
                     WHEN $9 = TRUE AND completed_at IS NULL THEN NOW() \
                     ELSE completed_at \
                 END, \
                 notes = COALESCE($10, notes), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {PLANNING_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.date)
        .bind(dto.time_slot)
        .bind(dto.activity_type)
        .bind(dto.activity_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.completed)
        .bind(&dto.notes)
        .fetch_optional(db)
        .await
        .context("Failed to update planning entry")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Planning not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_planning(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM planning WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete planning entry")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Planning not found")));
        }

        Ok(())
    }

    // --- Training sessions ---

    pub async fn list_training(
        db: &PgPool,
        user_id: Uuid,
        range: &DateRangeParams,
    ) -> Result<Vec<TrainingSession>, AppError> {
        sqlx::query_as::<_, TrainingSession>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM training_sessions \
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
        .context("Failed to list training sessions")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_training(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateTrainingSessionDto,
    ) -> Result<TrainingSession, AppError> {
        let routes_json = dto.routes.as_ref().map(|routes| routes.to_string());

        sqlx::query_as::<_, TrainingSession>(&format!(
            "INSERT INTO training_sessions \
                 (user_id, planning_id, date, duration_min, session_type, location, \
                  routes_json, best_grade, best_style, rpe, fatigue, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {TRAINING_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.planning_id)
        .bind(dto.date)
        .bind(dto.duration_min)
        .bind(&dto.session_type)
        .bind(&dto.location)
        .bind(&routes_json)
        .bind(&dto.best_grade)
        .bind(dto.best_style)
        .bind(dto.rpe)
        .bind(dto.fatigue)
        .bind(&dto.notes)
        .fetch_one(db)
        .await
        .context("Failed to insert training session")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn delete_training(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete training session")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Training session not found"
            )));
        }

        Ok(())
    }
}
