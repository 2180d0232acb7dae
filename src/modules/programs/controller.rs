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

use super::model::{CreateProgramDto, Program, ProgramFilterParams, UpdateProgramDto};
use super::service::ProgramService;

/// List the caller's programs
#[utoipa::path(
    get,
    path = "/api/programs",
    params(("active_only" = Option<bool>, Query, description = "Only the active program")),
    responses(
        (status = 200, description = "List of programs", body = Vec<Program>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn list_programs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<ProgramFilterParams>,
) -> Result<Json<Vec<Program>>, AppError> {
    let programs = ProgramService::list(&state.db, user.id, &filter).await?;
    Ok(Json(programs))
}

/// Get one program by id
#[utoipa::path(
    get,
    path = "/api/programs/{program_id}",
    params(("program_id" = Uuid, Path, description = "Program id")),
    responses(
        (status = 200, description = "Program", body = Program),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn get_program(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(program_id): Path<Uuid>,
) -> Result<Json<Program>, AppError> {
    let program = ProgramService::get(&state.db, user.id, program_id).await?;
    Ok(Json(program))
}

/// Create a program
#[utoipa::path(
    post,
    path = "/api/programs",
    request_body = CreateProgramDto,
    responses(
        (status = 201, description = "Program created", body = Program),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn create_program(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateProgramDto>,
) -> Result<(StatusCode, Json<Program>), AppError> {
    let program = ProgramService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// Update a program
#[utoipa::path(
    put,
    path = "/api/programs/{program_id}",
    params(("program_id" = Uuid, Path, description = "Program id")),
    request_body = UpdateProgramDto,
    responses(
        (status = 200, description = "Program updated", body = Program),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn update_program(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(program_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProgramDto>,
) -> Result<Json<Program>, AppError> {
    let program = ProgramService::update(&state.db, user.id, program_id, dto).await?;
    Ok(Json(program))
}

/// Delete a program
#[utoipa::path(
    delete,
    path = "/api/programs/{program_id}",
    params(("program_id" = Uuid, Path, description = "Program id")),
    responses(
        (status = 200, description = "Program deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn delete_program(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(program_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ProgramService::delete(&state.db, user.id, program_id).await?;
    Ok(Json(MessageResponse {
        message: "Program deleted successfully".to_string(),
    }))
}

/// Activate a program, deactivating all others
#[utoipa::path(
    post,
    path = "/api/programs/{program_id}/activate",
    params(("program_id" = Uuid, Path, description = "Program id")),
    responses(
        (status = 200, description = "Program activated", body = Program),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Programs"
)]
#[instrument(skip_all)]
pub async fn activate_program(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(program_id): Path<Uuid>,
) -> Result<Json<Program>, AppError> {
    let program = ProgramService::activate(&state.db, user.id, program_id).await?;
    Ok(Json(program))
}
