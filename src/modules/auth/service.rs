use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_auth::{create_access_token, create_refresh_token, decode_refresh_token};
use cruxlog_config::jwt::JwtConfig;
use cruxlog_core::errors::AppError;
use cruxlog_core::password::{hash_password, validate_password_strength, verify_password};

use crate::modules::users::model::User;

use super::model::{LoginRequest, RefreshRequest, RegisterRequestDto, TokenResponse};

const USER_COLUMNS: &str = "id, email, username, first_name, last_name, avatar_url, \
     is_active, is_verified, role, created_at, updated_at, last_login_at";

#[derive(sqlx::FromRow)]
struct AuthRow {
    id: Uuid,
    email: String,
    password_hash: String,
    is_active: bool,
}

pub struct AuthService;

impl AuthService {
    /// Registers a new account and its default planning configuration.
    #[instrument(skip_all, fields(email = %dto.email, username = %dto.username))]
    pub async fn register(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let email_taken = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .context("Failed to check email uniqueness")
            .map_err(AppError::database)?
            .is_some();

        if email_taken {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let username_taken =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE username = $1")
                .bind(&dto.username)
                .fetch_optional(db)
                .await
                .context("Failed to check username uniqueness")
                .map_err(AppError::database)?
                .is_some();

        if username_taken {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username already taken"
            )));
        }

        validate_password_strength(&dto.password).map_err(AppError::bad_request)?;

        let password_hash = hash_password(&dto.password)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to start registration transaction")
            .map_err(AppError::database)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, password_hash, first_name, last_name) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&dto.username)
        .bind(&password_hash)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to insert user")
        .map_err(AppError::database)?;

        sqlx::query("INSERT INTO user_configs (user_id) VALUES ($1)")
            .bind(user.id)
            .execute(&mut *tx)
            .await
            .context("Failed to create default user config")
            .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit registration")
            .map_err(AppError::database)?;

        Ok(user)
    }

    /// Authenticates by email or username and issues a token pair.
    ///
    /// Unknown identifier and wrong password produce the identical 401.
    #[instrument(skip_all, fields(identifier = %dto.identifier))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let row = sqlx::query_as::<_, AuthRow>(
            "SELECT id, email, password_hash, is_active FROM users \
             WHERE email = $1 OR username = $1",
        )
        .bind(&dto.identifier)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user for login")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("Incorrect email/username or password"))?;

        if !verify_password(&dto.password, &row.password_hash) {
            return Err(AppError::unauthorized(
                "Incorrect email/username or password",
            ));
        }

        if !row.is_active {
            return Err(AppError::forbidden("Inactive account"));
        }

        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(row.id)
            .execute(db)
            .await
            .context("Failed to stamp last login")
            .map_err(AppError::database)?;

        let access_token = create_access_token(&row.email, jwt_config)?;
        let refresh_token = create_refresh_token(&row.email, jwt_config)?;

        Ok(TokenResponse::bearer(access_token, refresh_token))
    }

    /// Exchanges a refresh token for a fresh token pair.
    #[instrument(skip_all)]
    pub async fn refresh(
        db: &PgPool,
        dto: RefreshRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let email = decode_refresh_token(&dto.refresh_token, jwt_config)
            .ok_or_else(|| AppError::unauthorized("Invalid refresh token"))?;

        let row = sqlx::query_as::<_, AuthRow>(
            "SELECT id, email, password_hash, is_active FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user for refresh")
        .map_err(AppError::database)?;

        let row = match row {
            Some(row) if row.is_active => row,
            _ => return Err(AppError::unauthorized("User not found or inactive")),
        };

        let access_token = create_access_token(&row.email, jwt_config)?;
        let refresh_token = create_refresh_token(&row.email, jwt_config)?;

        Ok(TokenResponse::bearer(access_token, refresh_token))
    }
}
