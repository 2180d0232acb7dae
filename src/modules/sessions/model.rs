//! Models for session templates, planned activities, and realized
//! training sessions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use cruxlog_core::pagination::PaginationParams;

/// Session intent. Stored as the Postgres enum `session_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "session_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Force,
    Resistance,
    Continuity,
    Onsight,
    Project,
    Mixed,
}

/// Planned activity kind. Stored as the Postgres enum `activity_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "activity_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Sae,
    Outdoor,
    Running,
    RoutineMorning,
    RoutineEvening,
    Rest,
    Other,
}

/// Day slot for planned activities. Stored as the Postgres enum `time_slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "time_slot", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

/// Climbing style of a best performance. Stored as `climbing_style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "climbing_style", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ClimbingStyle {
    Onsight,
    Flash,
    Redpoint,
    Project,
}

/// A reusable session template, e.g. "Résistance 4x4".
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SessionTemplate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub duration_min: Option<i32>,
    pub description: Option<String>,
    /// Ordered exercise ids as a JSON array string
    pub exercises_json: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionTemplate {
    /// Ordered exercise ids; absent or unparseable data is an empty list.
    pub fn exercise_ids(&self) -> Vec<Uuid> {
        self.exercises_json
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSessionTemplateDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub exercise_ids: Vec<Uuid>,
}

/// A planned activity on the calendar.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Planning {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub time_start: Option<NaiveTime>,
    pub activity_type: ActivityType,
    /// Optional link to an exercise or template
    pub activity_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePlanningDto {
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub activity_type: ActivityType,
    pub activity_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePlanningDto {
    pub date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub activity_type: Option<ActivityType>,
    pub activity_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub notes: Option<String>,
}

/// A realized training session (SAE or outdoor).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TrainingSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub planning_id: Option<Uuid>,
    pub date: NaiveDate,
    pub duration_min: Option<i32>,
    pub session_type: Option<String>,
    pub location: Option<String>,
    /// Climbed routes as a JSON array string,
    /// e.g. `[{"grade":"7a","style":"onsight","tries":1}]`
    pub routes_json: Option<String>,
    pub best_grade: Option<String>,
    pub best_style: Option<ClimbingStyle>,
    /// Rate of perceived exertion, 1-10
    pub rpe: Option<i32>,
    /// Fatigue level, 1-10
    pub fatigue: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingSession {
    /// Climbed routes; absent or unparseable data is an empty array.
    pub fn routes(&self) -> Value {
        cruxlog_core::serde::json_array_or_default(self.routes_json.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingSessionDto {
    pub planning_id: Option<Uuid>,
    pub date: NaiveDate,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub session_type: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    /// Climbed routes, stored verbatim as JSON
    pub routes: Option<Value>,
    #[validate(length(min = 1, max = 10))]
    pub best_grade: Option<String>,
    pub best_style: Option<ClimbingStyle>,
    #[validate(range(min = 1, max = 10))]
    pub rpe: Option<i32>,
    #[validate(range(min = 1, max = 10))]
    pub fatigue: Option<i32>,
    pub notes: Option<String>,
}

/// Date-bounded listing parameters shared by planning and training lists.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DateRangeParams {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_with_json(raw: Option<&str>) -> SessionTemplate {
        SessionTemplate {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Force Max".to_string(),
            session_type: SessionType::Force,
            duration_min: Some(120),
            description: None,
            exercises_json: raw.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_exercise_ids_round_trip() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let raw = serde_json::to_string(&ids).unwrap();
        let template = template_with_json(Some(&raw));
        assert_eq!(template.exercise_ids(), ids);
    }

    #[test]
    fn test_exercise_ids_default_on_bad_data() {
        assert!(template_with_json(None).exercise_ids().is_empty());
        assert!(template_with_json(Some("not json")).exercise_ids().is_empty());
    }

    #[test]
    fn test_training_session_routes_default() {
        let session = TrainingSession {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            planning_id: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            duration_min: None,
            session_type: None,
            location: None,
            routes_json: Some(r#"[{"grade":"7a","style":"onsight","tries":1}]"#.to_string()),
            best_grade: None,
            best_style: None,
            rpe: None,
            fatigue: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(session.routes()[0]["grade"], json!("7a"));
    }

    #[test]
    fn test_activity_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityType::RoutineEvening).unwrap(),
            r#""routine_evening""#
        );
        assert_eq!(serde_json::to_string(&TimeSlot::Morning).unwrap(), r#""morning""#);
        assert_eq!(
            serde_json::to_string(&ClimbingStyle::Redpoint).unwrap(),
            r#""redpoint""#
        );
    }
}
