use axum::Json;
use axum::extract::{Path, Query, State};
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
    CreatePlanningDto, CreateSessionTemplateDto, CreateTrainingSessionDto, DateRangeParams,
    Planning, SessionTemplate, TrainingSession, UpdatePlanningDto,
};
use super::service::SessionService;

/// List the caller's session templates
#[utoipa::path(
    get,
    path = "/api/sessions/templates",
    responses(
        (status = 200, description = "List of templates", body = Vec<SessionTemplate>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn list_templates(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<SessionTemplate>>, AppError> {
    let templates = SessionService::list_templates(&state.db, user.id).await?;
    Ok(Json(templates))
}

/// Create a session template
#[utoipa::path(
    post,
    path = "/api/sessions/templates",
    request_body = CreateSessionTemplateDto,
    responses(
        (status = 201, description = "Template created", body = SessionTemplate),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn create_template(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateSessionTemplateDto>,
) -> Result<(StatusCode, Json<SessionTemplate>), AppError> {
    let template = SessionService::create_template(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete a session template
#[utoipa::path(
    delete,
    path = "/api/sessions/templates/{template_id}",
    params(("template_id" = Uuid, Path, description = "Template id")),
    responses(
        (status = 200, description = "Template deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Template not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn delete_template(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(template_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    SessionService::delete_template(&state.db, user.id, template_id).await?;
    Ok(Json(MessageResponse {
        message: "Template deleted successfully".to_string(),
    }))
}

/// List planned activities, optionally bounded by date
#[utoipa::path(
    get,
    path = "/api/sessions/planning",
    params(
        ("date_from" = Option<String>, Query, description = "Start date (YYYY-MM-DD)"),
        ("date_to" = Option<String>, Query, description = "End date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Planned activities", body = Vec<Planning>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn list_planning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<Planning>>, AppError> {
    let planning = SessionService::list_planning(&state.db, user.id, &range).await?;
    Ok(Json(planning))
}

/// Create a planned activity
#[utoipa::path(
    post,
    path = "/api/sessions/planning",
    request_body = CreatePlanningDto,
    responses(
        (status = 201, description = "Planned activity created", body = Planning),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn create_planning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreatePlanningDto>,
) -> Result<(StatusCode, Json<Planning>), AppError> {
    let planning = SessionService::create_planning(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(planning)))
}

/// Update a planned activity (including marking it completed)
#[utoipa::path(
    put,
    path = "/api/sessions/planning/{planning_id}",
    params(("planning_id" = Uuid, Path, description = "Planning id")),
    request_body = UpdatePlanningDto,
    responses(
        (status = 200, description = "Planned activity updated", body = Planning),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Planning not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn update_planning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(planning_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePlanningDto>,
) -> Result<Json<Planning>, AppError> {
    let planning = SessionService::update_planning(&state.db, user.id, planning_id, dto).await?;
    Ok(Json(planning))
}

/// Delete a planned activity
#[utoipa::path(
    delete,
    path = "/api/sessions/planning/{planning_id}",
    params(("planning_id" = Uuid, Path, description = "Planning id")),
    responses(
        (status = 200, description = "Planned activity deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Planning not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn delete_planning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(planning_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    SessionService::delete_planning(&state.db, user.id, planning_id).await?;
    Ok(Json(MessageResponse {
        message: "Planning deleted successfully".to_string(),
    }))
}

/// List realized training sessions, optionally bounded by date
#[utoipa::path(
    get,
    path = "/api/sessions/training",
    params(
        ("date_from" = Option<String>, Query, description = "Start date (YYYY-MM-DD)"),
        ("date_to" = Option<String>, Query, description = "End date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Training sessions", body = Vec<TrainingSession>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn list_training(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<TrainingSession>>, AppError> {
    let sessions = SessionService::list_training(&state.db, user.id, &range).await?;
    Ok(Json(sessions))
}

/// Record a realized training session
#[utoipa::path(
    post,
    path = "/api/sessions/training",
    request_body = CreateTrainingSessionDto,
    responses(
        (status = 201, description = "Training session recorded", body = TrainingSession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn create_training(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateTrainingSessionDto>,
) -> Result<(StatusCode, Json<TrainingSession>), AppError> {
    let session = SessionService::create_training(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Delete a training session
#[utoipa::path(
    delete,
    path = "/api/sessions/training/{session_id}",
    params(("session_id" = Uuid, Path, description = "Training session id")),
    responses(
        (status = 200, description = "Training session deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Training session not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip_all)]
pub async fn delete_training(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    SessionService::delete_training(&state.db, user.id, session_id).await?;
    Ok(Json(MessageResponse {
        message: "Training session deleted successfully".to_string(),
    }))
}
