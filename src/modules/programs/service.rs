use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;
use cruxlog_core::serde::to_json_string;

use super::model::{CreateProgramDto, Program, ProgramFilterParams, UpdateProgramDto};

const PROGRAM_COLUMNS: &str = "id, user_id, name, description, duration_weeks, structure_json, \
     is_active, is_public, created_at, updated_at";

pub struct ProgramService;

impl ProgramService {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        filter: &ProgramFilterParams,
    ) -> Result<Vec<Program>, AppError> {
        sqlx::query_as::<_, Program>(&format!(
            "SELECT {PROGRAM_COLUMNS} FROM programs \
             WHERE user_id = $1 AND ($2 = FALSE OR is_active = TRUE) \
             ORDER BY created_at LIMIT $3 OFFSET $4"
        ))
        .bind(user_id)
        .bind(filter.active_only)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to list programs")
        .map_err(AppError::database)
    }

    pub async fn get(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(&format!(
            "SELECT {PROGRAM_COLUMNS} FROM programs WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch program")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Program not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateProgramDto,
    ) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(&format!(
            "INSERT INTO programs \
                 (user_id, name, description, duration_weeks, structure_json, is_active, is_public) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROGRAM_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.duration_weeks)
        .bind(to_json_string(&dto.structure))
        .bind(dto.is_active)
        .bind(dto.is_public)
        .fetch_one(db)
        .await
        .context("Failed to insert program")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdateProgramDto,
    ) -> Result<Program, AppError> {
        let structure_json = dto.structure.as_ref().map(to_json_string);

        sqlx::query_as::<_, Program>(&format!(
            "UPDATE programs SET \
                 name = COALESCE($3, name), \
                 description = COALESCE($4, description), \
                 duration_weeks = COALESCE($5, duration_weeks), \
                 structure_json = COALESCE($6, structure_json), \
                 is_active = COALESCE($7, is_active), \
                 is_public = COALESCE($8, is_public), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {PROGRAM_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.duration_weeks)
        .bind(&structure_json)
        .bind(dto.is_active)
        .bind(dto.is_public)
        .fetch_optional(db)
        .await
        .context("Failed to update program")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Program not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete program")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Program not found")));
        }

        Ok(())
    }

    /// Makes one program the active one, deactivating all others.
    #[instrument(skip(db))]
    pub async fn activate(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Program, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to start activation transaction")
            .map_err(AppError::database)?;

        sqlx::query("UPDATE programs SET is_active = FALSE WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .context("Failed to deactivate programs")
            .map_err(AppError::database)?;

        let program = sqlx::query_as::<_, Program>(&format!(
            "UPDATE programs SET is_active = TRUE, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {PROGRAM_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to activate program")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Program not found")))?;

        tx.commit()
            .await
            .context("Failed to commit activation")
            .map_err(AppError::database)?;

        Ok(program)
    }
}
