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

use super::model::{CreateExerciseDto, Exercise, ExerciseFilterParams, UpdateExerciseDto};
use super::service::ExerciseService;

/// List the caller's exercises
#[utoipa::path(
    get,
    path = "/api/exercises",
    params(
        ("type" = Option<String>, Query, description = "Filter by exercise type"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "List of exercises", body = Vec<Exercise>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exercises"
)]
#[instrument(skip_all)]
pub async fn list_exercises(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<ExerciseFilterParams>,
) -> Result<Json<Vec<Exercise>>, AppError> {
    let exercises = ExerciseService::list(&state.db, user.id, &filter).await?;
    Ok(Json(exercises))
}

/// Get one exercise by id
#[utoipa::path(
    get,
    path = "/api/exercises/{exercise_id}",
    params(("exercise_id" = Uuid, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise", body = Exercise),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exercises"
)]
#[instrument(skip_all)]
pub async fn get_exercise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<Exercise>, AppError> {
    let exercise = ExerciseService::get(&state.db, user.id, exercise_id).await?;
    Ok(Json(exercise))
}

/// Create an exercise
#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateExerciseDto,
    responses(
        (status = 201, description = "Exercise created", body = Exercise),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exercises"
)]
#[instrument(skip_all)]
pub async fn create_exercise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateExerciseDto>,
) -> Result<(StatusCode, Json<Exercise>), AppError> {
    let exercise = ExerciseService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Update an exercise
#[utoipa::path(
    put,
    path = "/api/exercises/{exercise_id}",
    params(("exercise_id" = Uuid, Path, description = "Exercise id")),
    request_body = UpdateExerciseDto,
    responses(
        (status = 200, description = "Exercise updated", body = Exercise),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exercises"
)]
#[instrument(skip_all)]
pub async fn update_exercise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(exercise_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateExerciseDto>,
) -> Result<Json<Exercise>, AppError> {
    let exercise = ExerciseService::update(&state.db, user.id, exercise_id, dto).await?;
    Ok(Json(exercise))
}

/// Delete an exercise
#[utoipa::path(
    delete,
    path = "/api/exercises/{exercise_id}",
    params(("exercise_id" = Uuid, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Exercises"
)]
#[instrument(skip_all)]
pub async fn delete_exercise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ExerciseService::delete(&state.db, user.id, exercise_id).await?;
    Ok(Json(MessageResponse {
        message: "Exercise deleted successfully".to_string(),
    }))
}
