use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use cruxlog_core::errors::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

use super::model::{
    BestPerformances, BestPerformancesParams, DashboardStats, GradeProgression, MonthlyVolume,
    MonthlyVolumeParams,
};
use super::service::StatsService;

/// Dashboard statistics for the caller
#[utoipa::path(
    get,
    path = "/api/stats/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
#[instrument(skip_all)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = StatsService::dashboard(&state.db, user.id).await?;
    Ok(Json(stats))
}

/// Monthly training volume over the last N months
#[utoipa::path(
    get,
    path = "/api/stats/monthly-volume",
    params(("months" = Option<i64>, Query, description = "Number of months to cover (default 12)")),
    responses(
        (status = 200, description = "Monthly volumes, chronological", body = Vec<MonthlyVolume>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
#[instrument(skip_all)]
pub async fn get_monthly_volume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<MonthlyVolumeParams>,
) -> Result<Json<Vec<MonthlyVolume>>, AppError> {
    let months = params.months.unwrap_or(12);
    let volume = StatsService::monthly_volume(&state.db, user.id, months).await?;
    Ok(Json(volume))
}

/// Routes climbed at a given grade, in completion order
#[utoipa::path(
    get,
    path = "/api/stats/progression/{grade}",
    params(("grade" = String, Path, description = "Grade, e.g. 7a")),
    responses(
        (status = 200, description = "Progression on the grade", body = GradeProgression),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
#[instrument(skip_all)]
pub async fn get_grade_progression(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(grade): Path<String>,
) -> Result<Json<GradeProgression>, AppError> {
    let progression = StatsService::grade_progression(&state.db, user.id, &grade).await?;
    Ok(Json(progression))
}

/// Best routes and longest runs
#[utoipa::path(
    get,
    path = "/api/stats/best-performances",
    params(("limit" = Option<i64>, Query, description = "Entries per list (default 10)")),
    responses(
        (status = 200, description = "Best performances", body = BestPerformances),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
#[instrument(skip_all)]
pub async fn get_best_performances(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<BestPerformancesParams>,
) -> Result<Json<BestPerformances>, AppError> {
    let limit = params.limit.unwrap_or(10);
    let best = StatsService::best_performances(&state.db, user.id, limit).await?;
    Ok(Json(best))
}
