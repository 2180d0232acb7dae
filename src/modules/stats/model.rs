//! Dashboard and aggregate statistics models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::goals::model::GoalProgress;

/// Headline numbers for the dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_training_sessions: i64,
    pub total_running_sessions: i64,
    pub total_routes: i64,
    pub current_month_sessions: i64,
    pub current_week_sessions: i64,
    pub goal_progress: Vec<GoalProgressEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoalProgressEntry {
    pub name: String,
    pub progress: GoalProgress,
}

/// One month of training volume.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyVolume {
    /// Human-readable label, e.g. "June 2025"
    pub month: String,
    pub training_sessions: i64,
    pub running_sessions: i64,
    pub total_distance_km: f64,
    pub total_elevation_m: i64,
}

impl MonthlyVolume {
    fn empty(date: NaiveDate) -> Self {
        Self {
            month: date.format("%B %Y").to_string(),
            training_sessions: 0,
            running_sessions: 0,
            total_distance_km: 0.0,
            total_elevation_m: 0,
        }
    }
}

/// Per-run volume data pulled for the monthly aggregation.
#[derive(Debug, Clone, FromRow)]
pub struct RunVolume {
    pub date: NaiveDate,
    pub distance_km: Option<f64>,
    pub elevation_gain_m: Option<i32>,
}

/// Buckets training and running sessions by calendar month,
/// chronologically ordered. Missing distances and elevations count as
/// zero.
pub fn aggregate_monthly_volume(
    training_dates: &[NaiveDate],
    runs: &[RunVolume],
) -> Vec<MonthlyVolume> {
    let mut monthly: BTreeMap<String, MonthlyVolume> = BTreeMap::new();

    for date in training_dates {
        let entry = monthly
            .entry(date.format("%Y-%m").to_string())
            .or_insert_with(|| MonthlyVolume::empty(*date));
        entry.training_sessions += 1;
    }

    for run in runs {
        let entry = monthly
            .entry(run.date.format("%Y-%m").to_string())
            .or_insert_with(|| MonthlyVolume::empty(run.date));
        entry.running_sessions += 1;
        entry.total_distance_km += run.distance_km.unwrap_or(0.0);
        entry.total_elevation_m += i64::from(run.elevation_gain_m.unwrap_or(0));
    }

    monthly.into_values().collect()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MonthlyVolumeParams {
    pub months: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BestPerformancesParams {
    pub limit: Option<i64>,
}

/// Routes climbed at one grade, in completion order.
#[derive(Debug, Serialize, ToSchema)]
pub struct GradeProgression {
    pub grade: String,
    pub count: usize,
    pub routes: Vec<GradeProgressionEntry>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct GradeProgressionEntry {
    pub name: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub style: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BestPerformances {
    pub best_routes: Vec<BestRouteEntry>,
    pub best_runs: Vec<BestRunEntry>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct BestRouteEntry {
    pub name: String,
    pub grade: String,
    pub location: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct BestRunEntry {
    pub distance_km: Option<f64>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub duration_min: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(y: i32, m: u32, d: u32, km: Option<f64>, elev: Option<i32>) -> RunVolume {
        RunVolume {
            date: date(y, m, d),
            distance_km: km,
            elevation_gain_m: elev,
        }
    }

    #[test]
    fn test_aggregation_buckets_by_month() {
        let training = vec![date(2025, 1, 3), date(2025, 1, 17), date(2025, 2, 2)];
        let runs = vec![run(2025, 1, 5, Some(10.0), Some(200))];

        let volume = aggregate_monthly_volume(&training, &runs);
        assert_eq!(volume.len(), 2);

        assert_eq!(volume[0].month, "January 2025");
        assert_eq!(volume[0].training_sessions, 2);
        assert_eq!(volume[0].running_sessions, 1);
        assert!((volume[0].total_distance_km - 10.0).abs() < f64::EPSILON);
        assert_eq!(volume[0].total_elevation_m, 200);

        assert_eq!(volume[1].month, "February 2025");
        assert_eq!(volume[1].training_sessions, 1);
        assert_eq!(volume[1].running_sessions, 0);
    }

    #[test]
    fn test_aggregation_orders_chronologically_across_years() {
        // label-alphabetical order would put April 2025 first
        let training = vec![date(2025, 4, 1), date(2024, 12, 1), date(2025, 1, 1)];
        let volume = aggregate_monthly_volume(&training, &[]);

        let months: Vec<&str> = volume.iter().map(|v| v.month.as_str()).collect();
        assert_eq!(months, vec!["December 2024", "January 2025", "April 2025"]);
    }

    #[test]
    fn test_aggregation_missing_metrics_count_as_zero() {
        let runs = vec![
            run(2025, 3, 1, None, None),
            run(2025, 3, 8, Some(5.5), Some(100)),
        ];
        let volume = aggregate_monthly_volume(&[], &runs);

        assert_eq!(volume.len(), 1);
        assert_eq!(volume[0].running_sessions, 2);
        assert!((volume[0].total_distance_km - 5.5).abs() < f64::EPSILON);
        assert_eq!(volume[0].total_elevation_m, 100);
    }

    #[test]
    fn test_aggregation_empty_input() {
        assert!(aggregate_monthly_volume(&[], &[]).is_empty());
    }
}
