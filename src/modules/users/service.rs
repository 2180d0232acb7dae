use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;
use cruxlog_core::pagination::{PaginationMeta, PaginationParams};
use cruxlog_core::password::{hash_password, validate_password_strength, verify_password};

use super::model::{
    ChangePasswordDto, PaginatedUsersResponse, UpdateConfigDto, UpdateProfileDto, User, UserConfig,
};

const USER_COLUMNS: &str = "id, email, username, first_name, last_name, avatar_url, \
     is_active, is_verified, role, created_at, updated_at, last_login_at";

const CONFIG_COLUMNS: &str = "id, user_id, sae_per_week, outdoor_per_week_min, \
     outdoor_per_week_max, rest_days, rest_frequency_weeks, morning_run_enabled, \
     target_date, target_level, available_slots_json, created_at, updated_at";

pub struct UserService;

impl UserService {
    /// Looks up a user by email. Used by identity resolution on every
    /// authenticated request.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 avatar_url = COALESCE($4, avatar_url), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.avatar_url)
        .fetch_one(db)
        .await
        .context("Failed to update profile")
        .map_err(AppError::database)
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn change_password(
        db: &PgPool,
        user_id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let current_hash =
            sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_one(db)
                .await
                .context("Failed to fetch password hash")
                .map_err(AppError::database)?;

        if !verify_password(&dto.current_password, &current_hash) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Incorrect current password"
            )));
        }

        validate_password_strength(&dto.new_password).map_err(AppError::bad_request)?;

        let new_hash = hash_password(&dto.new_password)?;

        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(&new_hash)
            .execute(db)
            .await
            .context("Failed to update password")
            .map_err(AppError::database)?;

        Ok(())
    }

    pub async fn get_config(db: &PgPool, user_id: Uuid) -> Result<UserConfig, AppError> {
        sqlx::query_as::<_, UserConfig>(&format!(
            "SELECT {CONFIG_COLUMNS} FROM user_configs WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user config")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Configuration not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_config(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateConfigDto,
    ) -> Result<UserConfig, AppError> {
        sqlx::query_as::<_, UserConfig>(&format!(
            "UPDATE user_configs SET \
                 sae_per_week = COALESCE($2, sae_per_week), \
                 outdoor_per_week_min = COALESCE($3, outdoor_per_week_min), \
                 outdoor_per_week_max = COALESCE($4, outdoor_per_week_max), \
                 rest_days = COALESCE($5, rest_days), \
                 rest_frequency_weeks = COALESCE($6, rest_frequency_weeks), \
                 morning_run_enabled = COALESCE($7, morning_run_enabled), \
                 target_date = COALESCE($8, target_date), \
                 target_level = COALESCE($9, target_level), \
                 updated_at = NOW() \
             WHERE user_id = $1 \
             RETURNING {CONFIG_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.sae_per_week)
        .bind(dto.outdoor_per_week_min)
        .bind(dto.outdoor_per_week_max)
        .bind(dto.rest_days)
        .bind(dto.rest_frequency_weeks)
        .bind(dto.morning_run_enabled)
        .bind(dto.target_date)
        .bind(&dto.target_level)
        .fetch_optional(db)
        .await
        .context("Failed to update user config")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Configuration not found")))
    }

    /// Deletes the caller's account; owned rows go with it via cascades.
    #[instrument(skip(db))]
    pub async fn delete_account(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete account")
            .map_err(AppError::database)?;

        Ok(())
    }

    pub async fn list_users(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let limit = pagination.limit();
        let offset = pagination.offset();

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .context("Failed to count users")
            .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to list users")
        .map_err(AppError::database)?;

        Ok(PaginatedUsersResponse {
            data,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
