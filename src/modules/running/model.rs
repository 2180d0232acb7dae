use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A running session: distance, elevation, pace, heart rate.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RunningSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub duration_min: Option<i32>,
    pub distance_km: Option<f64>,
    pub elevation_gain_m: Option<i32>,
    pub average_pace_min_km: Option<f64>,
    pub average_heart_rate: Option<i32>,
    pub max_heart_rate: Option<i32>,
    /// footing, fractionné, sortie longue, ...
    pub session_type: Option<String>,
    pub location: Option<String>,
    pub comments: Option<String>,
    /// Rate of perceived exertion, 1-10
    pub rpe: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RunningSession {
    /// Average speed in km/h derived from the pace, 0 when unknown.
    pub fn average_speed_kmh(&self) -> f64 {
        match self.average_pace_min_km {
            Some(pace) if pace > 0.0 => 60.0 / pace,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRunningSessionDto {
    pub date: NaiveDate,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0))]
    pub elevation_gain_m: Option<i32>,
    #[validate(range(min = 0.0))]
    pub average_pace_min_km: Option<f64>,
    #[validate(range(min = 20, max = 250))]
    pub average_heart_rate: Option<i32>,
    #[validate(range(min = 20, max = 250))]
    pub max_heart_rate: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub session_type: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    pub comments: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub rpe: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRunningSessionDto {
    pub date: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0))]
    pub elevation_gain_m: Option<i32>,
    #[validate(range(min = 0.0))]
    pub average_pace_min_km: Option<f64>,
    #[validate(range(min = 20, max = 250))]
    pub average_heart_rate: Option<i32>,
    #[validate(range(min = 20, max = 250))]
    pub max_heart_rate: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub session_type: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    pub comments: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub rpe: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with_pace(pace: Option<f64>) -> RunningSession {
        RunningSession {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            duration_min: Some(60),
            distance_km: Some(12.0),
            elevation_gain_m: Some(300),
            average_pace_min_km: pace,
            average_heart_rate: None,
            max_heart_rate: None,
            session_type: Some("footing".to_string()),
            location: None,
            comments: None,
            rpe: Some(5),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_speed_from_pace() {
        let run = run_with_pace(Some(5.0));
        assert!((run.average_speed_kmh() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_speed_zero_without_pace() {
        assert_eq!(run_with_pace(None).average_speed_kmh(), 0.0);
        assert_eq!(run_with_pace(Some(0.0)).average_speed_kmh(), 0.0);
    }
}
