use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    CreateGoalCategoryDto, GoalCategory, GoalCategoryWithProgress, UpdateGoalCategoryDto,
};
use super::service::GoalService;

/// List the caller's goal categories with progress
#[utoipa::path(
    get,
    path = "/api/goals",
    responses(
        (status = 200, description = "Goal categories with progress", body = Vec<GoalCategoryWithProgress>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Goals"
)]
#[instrument(skip_all)]
pub async fn list_goal_categories(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<GoalCategoryWithProgress>>, AppError> {
    let categories = GoalService::list(&state.db, user.id).await?;
    Ok(Json(categories))
}

/// Get one goal category with progress
#[utoipa::path(
    get,
    path = "/api/goals/{category_id}",
    params(("category_id" = Uuid, Path, description = "Goal category id")),
    responses(
        (status = 200, description = "Goal category with progress", body = GoalCategoryWithProgress),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Goal category not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Goals"
)]
#[instrument(skip_all)]
pub async fn get_goal_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<Uuid>,
) -> Result<Json<GoalCategoryWithProgress>, AppError> {
    let category = GoalService::get(&state.db, user.id, category_id).await?;
    Ok(Json(category))
}

/// Create a goal category
#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalCategoryDto,
    responses(
        (status = 201, description = "Goal category created", body = GoalCategory),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Goals"
)]
#[instrument(skip_all)]
pub async fn create_goal_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateGoalCategoryDto>,
) -> Result<(StatusCode, Json<GoalCategory>), AppError> {
    let category = GoalService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a goal category
#[utoipa::path(
    put,
    path = "/api/goals/{category_id}",
    params(("category_id" = Uuid, Path, description = "Goal category id")),
    request_body = UpdateGoalCategoryDto,
    responses(
        (status = 200, description = "Goal category updated", body = GoalCategory),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Goal category not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Goals"
)]
#[instrument(skip_all)]
pub async fn update_goal_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateGoalCategoryDto>,
) -> Result<Json<GoalCategory>, AppError> {
    let category = GoalService::update(&state.db, user.id, category_id, dto).await?;
    Ok(Json(category))
}

/// Delete a goal category
#[utoipa::path(
    delete,
    path = "/api/goals/{category_id}",
    params(("category_id" = Uuid, Path, description = "Goal category id")),
    responses(
        (status = 200, description = "Goal category deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Goal category not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Goals"
)]
#[instrument(skip_all)]
pub async fn delete_goal_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    GoalService::delete(&state.db, user.id, category_id).await?;
    Ok(Json(MessageResponse {
        message: "Goal category deleted successfully".to_string(),
    }))
}
