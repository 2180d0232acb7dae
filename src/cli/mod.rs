//! Administrative commands dispatched from `main` before server startup.

use anyhow::{Context, bail};
use sqlx::PgPool;

use cruxlog_core::password::{hash_password, validate_password_strength};

/// Creates an admin account with a verified email.
///
/// Admins cannot be created through the API; this is the bootstrap path
/// for the first account.
pub async fn create_admin(
    pool: &PgPool,
    email: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    validate_password_strength(password)?;

    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE email = $1 OR username = $2",
    )
    .bind(email)
    .bind(username)
    .fetch_one(pool)
    .await
    .context("Failed to check for existing account")?;

    if existing > 0 {
        bail!("An account with that email or username already exists");
    }

    let password_hash = hash_password(password).map_err(|e| e.error)?;

    let mut tx = pool
        .begin()
        .await
        .context("Failed to start transaction")?;

    let user_id = sqlx::query_scalar::<_, uuid::Uuid>(
        "INSERT INTO users (email, username, password_hash, role, is_verified) \
         VALUES ($1, $2, $3, 'admin', TRUE) \
         RETURNING id",
    )
    .bind(email)
    .bind(username)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .context("Failed to insert admin user")?;

    sqlx::query("INSERT INTO user_configs (user_id) VALUES ($1)")
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .context("Failed to create default config")?;

    tx.commit().await.context("Failed to commit")?;

    Ok(())
}
