use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::sessions::model::DateRangeParams;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateRunningSessionDto, RunningSession, UpdateRunningSessionDto};
use super::service::RunningService;

/// List the caller's running sessions, optionally bounded by date
#[utoipa::path(
    get,
    path = "/api/running",
    params(
        ("date_from" = Option<String>, Query, description = "Start date (YYYY-MM-DD)"),
        ("date_to" = Option<String>, Query, description = "End date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Running sessions", body = Vec<RunningSession>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Running"
)]
#[instrument(skip_all)]
pub async fn list_running_sessions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<RunningSession>>, AppError> {
    let sessions = RunningService::list(&state.db, user.id, &range).await?;
    Ok(Json(sessions))
}

/// Get one running session by id
#[utoipa::path(
    get,
    path = "/api/running/{session_id}",
    params(("session_id" = Uuid, Path, description = "Running session id")),
    responses(
        (status = 200, description = "Running session", body = RunningSession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Running session not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Running"
)]
#[instrument(skip_all)]
pub async fn get_running_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RunningSession>, AppError> {
    let session = RunningService::get(&state.db, user.id, session_id).await?;
    Ok(Json(session))
}

/// Record a running session
#[utoipa::path(
    post,
    path = "/api/running",
    request_body = CreateRunningSessionDto,
    responses(
        (status = 201, description = "Running session recorded", body = RunningSession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Running"
)]
#[instrument(skip_all)]
pub async fn create_running_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateRunningSessionDto>,
) -> Result<(StatusCode, Json<RunningSession>), AppError> {
    let session = RunningService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Update a running session
#[utoipa::path(
    put,
    path = "/api/running/{session_id}",
    params(("session_id" = Uuid, Path, description = "Running session id")),
    request_body = UpdateRunningSessionDto,
    responses(
        (status = 200, description = "Running session updated", body = RunningSession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Running session not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Running"
)]
#[instrument(skip_all)]
pub async fn update_running_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRunningSessionDto>,
) -> Result<Json<RunningSession>, AppError> {
    let session = RunningService::update(&state.db, user.id, session_id, dto).await?;
    Ok(Json(session))
}

/// Delete a running session
#[utoipa::path(
    delete,
    path = "/api/running/{session_id}",
    params(("session_id" = Uuid, Path, description = "Running session id")),
    responses(
        (status = 200, description = "Running session deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Running session not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Running"
)]
#[instrument(skip_all)]
pub async fn delete_running_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    RunningService::delete(&state.db, user.id, session_id).await?;
    Ok(Json(MessageResponse {
        message: "Running session deleted successfully".to_string(),
    }))
}
