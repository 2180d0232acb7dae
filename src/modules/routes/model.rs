use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use cruxlog_core::pagination::PaginationParams;

/// Query values arrive as strings; treat "true"/"1" as set.
pub(crate) fn deserialize_query_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(matches!(s.as_deref(), Some("true") | Some("1")))
}

/// Route protection style. Stored as the Postgres enum `route_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "route_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Bolted
    Sport,
    /// Traditional / adventure terrain
    Trad,
    Mixed,
}

/// A long multi-pitch route (grande voie), optionally counting toward a
/// goal category.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Route {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_category_id: Option<Uuid>,
    pub name: String,
    pub location: String,
    /// French grade, e.g. "7a" or "ED-"
    pub grade: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub length_m: Option<i32>,
    pub pitch_count: Option<i32>,
    pub date_completed: Option<NaiveDate>,
    /// onsight, flash, redpoint, ...
    pub style: Option<String>,
    pub photo_url: Option<String>,
    pub comments: Option<String>,
    /// Personal rating, 1-5 stars
    pub rating: Option<i32>,
    pub validated_for_de: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRouteDto {
    pub goal_category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(length(min = 1, max = 10))]
    pub grade: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    #[validate(range(min = 1))]
    pub length_m: Option<i32>,
    #[validate(range(min = 1))]
    pub pitch_count: Option<i32>,
    pub date_completed: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub style: Option<String>,
    pub photo_url: Option<String>,
    pub comments: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[serde(default)]
    pub validated_for_de: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRouteDto {
    pub goal_category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub grade: Option<String>,
    #[serde(rename = "type")]
    pub route_type: Option<RouteType>,
    #[validate(range(min = 1))]
    pub length_m: Option<i32>,
    #[validate(range(min = 1))]
    pub pitch_count: Option<i32>,
    pub date_completed: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub style: Option<String>,
    pub photo_url: Option<String>,
    pub comments: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub validated_for_de: Option<bool>,
}

/// Query parameters for the route listing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RouteFilterParams {
    #[serde(rename = "type")]
    pub route_type: Option<RouteType>,
    #[serde(default, deserialize_with = "deserialize_query_bool")]
    pub validated_only: bool,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_type_serialization() {
        assert_eq!(serde_json::to_string(&RouteType::Sport).unwrap(), r#""sport""#);
        assert_eq!(serde_json::to_string(&RouteType::Trad).unwrap(), r#""trad""#);
    }

    #[test]
    fn test_create_route_dto_defaults() {
        let json = r#"{"name":"Voie Petit","location":"Verdon","grade":"ED-","type":"sport"}"#;
        let dto: CreateRouteDto = serde_json::from_str(json).unwrap();
        assert!(!dto.validated_for_de);
        assert!(dto.goal_category_id.is_none());
    }

    #[test]
    fn test_filter_params_default_validated_only() {
        let filter: RouteFilterParams = serde_json::from_str("{}").unwrap();
        assert!(!filter.validated_only);
        assert!(filter.route_type.is_none());
    }

    #[test]
    fn test_filter_params_validated_only_from_string() {
        let filter: RouteFilterParams =
            serde_json::from_str(r#"{"validated_only":"true","type":"trad"}"#).unwrap();
        assert!(filter.validated_only);
        assert_eq!(filter.route_type, Some(RouteType::Trad));
    }
}
