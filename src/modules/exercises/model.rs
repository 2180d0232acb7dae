use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Exercise category. Stored as the Postgres enum `exercise_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "exercise_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Sae,
    Outdoor,
    Running,
    RoutineMorning,
    RoutineEvening,
    Other,
}

/// A personal exercise, e.g. "Bloc Force Max" or "Footing Easy".
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub duration_min: Option<i32>,
    pub description: Option<String>,
    /// Intensity from 1 (easy) to 5 (very hard)
    pub intensity: Option<i32>,
    /// Comma-separated focus tags, e.g. "force,resistance,technique"
    pub focus: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exercise {
    /// Focus tags as a list; an absent column is an empty list.
    pub fn focus_list(&self) -> Vec<String> {
        self.focus
            .as_deref()
            .map(|focus| {
                focus
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub intensity: Option<i32>,
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<ExerciseType>,
    #[validate(range(min = 1))]
    pub duration_min: Option<i32>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub intensity: Option<i32>,
    pub focus: Option<String>,
}

/// Query parameters for the exercise listing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExerciseFilterParams {
    #[serde(rename = "type")]
    pub exercise_type: Option<ExerciseType>,
    #[serde(flatten)]
    pub pagination: cruxlog_core::pagination::PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_with_focus(focus: Option<&str>) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Bloc Force Max".to_string(),
            exercise_type: ExerciseType::Sae,
            duration_min: Some(90),
            description: None,
            intensity: Some(5),
            focus: focus.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_focus_list_splits_and_trims() {
        let exercise = exercise_with_focus(Some("force, resistance ,technique"));
        assert_eq!(exercise.focus_list(), vec!["force", "resistance", "technique"]);
    }

    #[test]
    fn test_focus_list_empty_when_absent() {
        let exercise = exercise_with_focus(None);
        assert!(exercise.focus_list().is_empty());
    }

    #[test]
    fn test_exercise_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ExerciseType::RoutineMorning).unwrap(),
            r#""routine_morning""#
        );
        assert_eq!(serde_json::to_string(&ExerciseType::Sae).unwrap(), r#""sae""#);
    }

    #[test]
    fn test_exercise_serializes_type_field() {
        let serialized = serde_json::to_string(&exercise_with_focus(None)).unwrap();
        assert!(serialized.contains(r#""type":"sae""#));
    }
}
