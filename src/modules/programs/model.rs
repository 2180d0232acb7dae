use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use cruxlog_core::pagination::PaginationParams;
use cruxlog_core::serde::json_object_or_default;

use crate::modules::routes::model::deserialize_query_bool;

/// A training program, e.g. "Progression force 8 semaines".
///
/// At most one program is active at a time; activation flips the others
/// off.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Program {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: Option<i32>,
    /// Week-by-week plan as a JSON object string,
    /// e.g. `{"week1":[{"day":"monday","session_template_id":"..."}]}`
    pub structure_json: Option<String>,
    pub is_active: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    /// Program structure as a JSON object; absent or unparseable is `{}`.
    pub fn structure(&self) -> Value {
        json_object_or_default(self.structure_json.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProgramDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 104))]
    pub duration_weeks: Option<i32>,
    #[serde(default = "default_structure")]
    pub structure: Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_public: bool,
}

fn default_structure() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProgramDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 104))]
    pub duration_weeks: Option<i32>,
    pub structure: Option<Value>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

/// Query parameters for the program listing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProgramFilterParams {
    #[serde(default, deserialize_with = "deserialize_query_bool")]
    pub active_only: bool,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structure_default() {
        let program = Program {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Préparation DE".to_string(),
            description: None,
            duration_weeks: Some(8),
            structure_json: None,
            is_active: false,
            is_public: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(program.structure(), json!({}));
    }

    #[test]
    fn test_create_dto_defaults() {
        let dto: CreateProgramDto = serde_json::from_str(r#"{"name":"Force 8 semaines"}"#).unwrap();
        assert_eq!(dto.structure, json!({}));
        assert!(!dto.is_active);
        assert!(!dto.is_public);
    }

    #[test]
    fn test_filter_params_active_only_from_string() {
        let filter: ProgramFilterParams =
            serde_json::from_str(r#"{"active_only":"1"}"#).unwrap();
        assert!(filter.active_only);
    }
}
