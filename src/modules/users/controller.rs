use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;
use cruxlog_core::pagination::PaginationParams;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    ChangePasswordDto, PaginatedUsersResponse, UpdateConfigDto, UpdateProfileDto, User, UserConfig,
};
use super::service::UserService;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_profile(&state.db, user.id, dto).await?;
    Ok(Json(user))
}

/// Change the caller's password
#[utoipa::path(
    post,
    path = "/api/users/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Wrong current password or weak new password", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::change_password(&state.db, user.id, dto).await?;
    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}

/// Get the caller's planning configuration
#[utoipa::path(
    get,
    path = "/api/users/config",
    responses(
        (status = 200, description = "User configuration", body = UserConfig),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_config(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserConfig>, AppError> {
    let config = UserService::get_config(&state.db, user.id).await?;
    Ok(Json(config))
}

/// Update the caller's planning configuration
#[utoipa::path(
    put,
    path = "/api/users/config",
    request_body = UpdateConfigDto,
    responses(
        (status = 200, description = "Configuration updated", body = UserConfig),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_config(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateConfigDto>,
) -> Result<Json<UserConfig>, AppError> {
    let config = UserService::update_config(&state.db, user.id, dto).await?;
    Ok(Json(config))
}

/// Delete the caller's account and all owned data
#[utoipa::path(
    delete,
    path = "/api/users/account",
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_account(&state.db, user.id).await?;
    Ok(Json(MessageResponse {
        message: "Account deleted successfully".to_string(),
    }))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users/list",
    params(
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin privileges required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let response = UserService::list_users(&state.db, &pagination).await?;
    Ok(Json(response))
}

/// Delete a user by id (admin only)
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_user(&state.db, user_id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
