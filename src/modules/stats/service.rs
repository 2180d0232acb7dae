use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use crate::modules::goals::service::GoalService;

use super::model::{
    BestPerformances, BestRouteEntry, BestRunEntry, DashboardStats, GoalProgressEntry,
    GradeProgression, GradeProgressionEntry, MonthlyVolume, RunVolume, aggregate_monthly_volume,
};

async fn count_owned(db: &PgPool, sql: &str, user_id: Uuid) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>(sql)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to count rows")
        .map_err(AppError::database)
}

pub struct StatsService;

impl StatsService {
    pub async fn dashboard(db: &PgPool, user_id: Uuid) -> Result<DashboardStats, AppError> {
        let total_training = count_owned(
            db,
            "SELECT COUNT(*) FROM training_sessions WHERE user_id = $1",
            user_id,
        )
        .await?;
        let total_running = count_owned(
            db,
            "SELECT COUNT(*) FROM running_sessions WHERE user_id = $1",
            user_id,
        )
        .await?;
        let total_routes =
            count_owned(db, "SELECT COUNT(*) FROM routes WHERE user_id = $1", user_id).await?;

        let today = Utc::now().date_naive();
        let first_of_month = today.with_day(1).unwrap_or(today);
        let start_of_week = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));

        let current_month = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM training_sessions WHERE user_id = $1 AND date >= $2",
        )
        .bind(user_id)
        .bind(first_of_month)
        .fetch_one(db)
        .await
        .context("Failed to count current month sessions")
        .map_err(AppError::database)?;

        let current_week = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM training_sessions WHERE user_id = $1 AND date >= $2",
        )
        .bind(user_id)
        .bind(start_of_week)
        .fetch_one(db)
        .await
        .context("Failed to count current week sessions")
        .map_err(AppError::database)?;

        let goal_progress = GoalService::list(db, user_id)
            .await?
            .into_iter()
            .map(|entry| GoalProgressEntry {
                name: entry.category.name,
                progress: entry.progress,
            })
            .collect();

        Ok(DashboardStats {
            total_training_sessions: total_training,
            total_running_sessions: total_running,
            total_routes,
            current_month_sessions: current_month,
            current_week_sessions: current_week,
            goal_progress,
        })
    }

    pub async fn monthly_volume(
        db: &PgPool,
        user_id: Uuid,
        months: i64,
    ) -> Result<Vec<MonthlyVolume>, AppError> {
        let months = months.max(1);
        let start_date = Utc::now().date_naive() - Duration::days(30 * months);

        let training_dates = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT date FROM training_sessions WHERE user_id = $1 AND date >= $2",
        )
        .bind(user_id)
        .bind(start_date)
        .fetch_all(db)
        .await
        .context("Failed to fetch training dates")
        .map_err(AppError::database)?;

        let runs = sqlx::query_as::<_, RunVolume>(
            "SELECT date, distance_km, elevation_gain_m FROM running_sessions \
             WHERE user_id = $1 AND date >= $2",
        )
        .bind(user_id)
        .bind(start_date)
        .fetch_all(db)
        .await
        .context("Failed to fetch running volumes")
        .map_err(AppError::database)?;

        Ok(aggregate_monthly_volume(&training_dates, &runs))
    }

    pub async fn grade_progression(
        db: &PgPool,
        user_id: Uuid,
        grade: &str,
    ) -> Result<GradeProgression, AppError> {
        let routes = sqlx::query_as::<_, GradeProgressionEntry>(
            "SELECT name, location, date_completed AS date, style FROM routes \
             WHERE user_id = $1 AND grade = $2 \
             ORDER BY date_completed NULLS LAST",
        )
        .bind(user_id)
        .bind(grade)
        .fetch_all(db)
        .await
        .context("Failed to fetch grade progression")
        .map_err(AppError::database)?;

        Ok(GradeProgression {
            grade: grade.to_string(),
            count: routes.len(),
            routes,
        })
    }

    pub async fn best_performances(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<BestPerformances, AppError> {
        let limit = limit.clamp(1, 100);

        let best_routes = sqlx::query_as::<_, BestRouteEntry>(
            "SELECT name, grade, location, date_completed AS date FROM routes \
             WHERE user_id = $1 \
             ORDER BY grade DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("Failed to fetch best routes")
        .map_err(AppError::database)?;

        let best_runs = sqlx::query_as::<_, BestRunEntry>(
            "SELECT distance_km, date, location, duration_min FROM running_sessions \
             WHERE user_id = $1 AND distance_km IS NOT NULL \
             ORDER BY distance_km DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("Failed to fetch best runs")
        .map_err(AppError::database)?;

        Ok(BestPerformances {
            best_routes,
            best_runs,
        })
    }
}
