//! Goal categories for the DE certification, e.g. "8 voies ED- de 200m
//! en équipé", with progress derived from validated routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use cruxlog_core::serde::json_object_or_default;

/// A category of routes to accumulate toward the goal.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct GoalCategory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Number of validated routes required to complete the category
    pub required_count: i32,
    /// Matching criteria as a JSON object string,
    /// e.g. `{"min_grade":"7a","min_length":200,"route_type":"sport"}`
    pub criteria_json: Option<String>,
    /// Display position
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GoalCategory {
    /// Criteria as a JSON object; absent or unparseable data is `{}`.
    pub fn criteria(&self) -> Value {
        json_object_or_default(self.criteria_json.as_deref())
    }
}

/// Progress of a category: validated routes against the required count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct GoalProgress {
    pub completed: i64,
    pub required: i32,
    pub percentage: i32,
}

impl GoalProgress {
    pub fn compute(completed: i64, required: i32) -> Self {
        let percentage = if required > 0 {
            (completed * 100 / required as i64) as i32
        } else {
            0
        };

        Self {
            completed,
            required,
            percentage,
        }
    }
}

/// A category together with its computed progress.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalCategoryWithProgress {
    #[serde(flatten)]
    pub category: GoalCategory,
    pub progress: GoalProgress,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGoalCategoryDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub required_count: i32,
    #[serde(default = "default_criteria")]
    pub criteria: Value,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

fn default_criteria() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalCategoryDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub required_count: Option<i32>,
    pub criteria: Option<Value>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_progress_partial() {
        let progress = GoalProgress::compute(3, 8);
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.required, 8);
        assert_eq!(progress.percentage, 37);
    }

    #[test]
    fn test_progress_complete() {
        assert_eq!(GoalProgress::compute(8, 8).percentage, 100);
    }

    #[test]
    fn test_progress_overshoot() {
        // more validated routes than required still counts them all
        let progress = GoalProgress::compute(10, 8);
        assert_eq!(progress.percentage, 125);
    }

    #[test]
    fn test_progress_zero_required() {
        assert_eq!(GoalProgress::compute(5, 0).percentage, 0);
    }

    #[test]
    fn test_criteria_default() {
        let category = GoalCategory {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "ED- Équipé 200m".to_string(),
            description: None,
            required_count: 8,
            criteria_json: None,
            sort_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(category.criteria(), json!({}));
    }

    #[test]
    fn test_create_dto_defaults_criteria_to_empty_object() {
        let json = r#"{"name":"TD+ Trad","required_count":4}"#;
        let dto: CreateGoalCategoryDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.criteria, json!({}));
        assert!(dto.sort_order.is_none());
    }

    #[test]
    fn test_category_serializes_order_field() {
        let category = GoalCategory {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "ED- Équipé 200m".to_string(),
            description: None,
            required_count: 8,
            criteria_json: None,
            sort_order: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let serialized = serde_json::to_string(&category).unwrap();
        assert!(serialized.contains(r#""order":2"#));
        assert!(!serialized.contains("sort_order"));
    }
}
