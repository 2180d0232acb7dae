//! User data models and DTOs.
//!
//! Contains the user entity, the per-user planning configuration, and the
//! request/response DTOs for profile and account management.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use cruxlog_core::PaginationMeta;

/// Account role. Stored as the Postgres enum `user_role`.
///
/// Authorization decisions match on this exhaustively; role strings never
/// leak past the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Coach,
    Admin,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Coach-level access; admins qualify too.
    pub fn is_coach(self) -> bool {
        matches!(self, UserRole::Coach | UserRole::Admin)
    }
}

/// A user account.
///
/// The password hash lives only in the database and in narrow query
/// structs inside the services; it is never part of this struct, so a
/// `User` can be serialized into any response as-is.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name: "First Last" when both are set, username otherwise.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.username.clone(),
        }
    }
}

/// Per-user planning configuration, created with defaults at registration.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserConfig {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sae_per_week: i32,
    pub outdoor_per_week_min: i32,
    pub outdoor_per_week_max: i32,
    pub rest_days: i32,
    pub rest_frequency_weeks: i32,
    pub morning_run_enabled: bool,
    pub target_date: Option<NaiveDate>,
    pub target_level: Option<String>,
    pub available_slots_json: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for updating the caller's profile. Only provided fields change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// DTO for changing the caller's password.
///
/// The current password is re-verified before the new one is accepted;
/// the new password goes through the registration strength policy.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 1))]
    pub new_password: String,
}

/// DTO for updating the planning configuration. Only provided fields change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateConfigDto {
    #[validate(range(min = 0, max = 14))]
    pub sae_per_week: Option<i32>,
    #[validate(range(min = 0, max = 14))]
    pub outdoor_per_week_min: Option<i32>,
    #[validate(range(min = 0, max = 14))]
    pub outdoor_per_week_max: Option<i32>,
    #[validate(range(min = 0, max = 7))]
    pub rest_days: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub rest_frequency_weeks: Option<i32>,
    pub morning_run_enabled: Option<bool>,
    pub target_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 10))]
    pub target_level: Option<String>,
}

/// Paginated user listing for the admin endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            first_name: None,
            last_name: None,
            avatar_url: None,
            is_active: true,
            is_verified: false,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&UserRole::Coach).unwrap(), r#""coach""#);
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
    }

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Coach.is_admin());
        assert!(UserRole::Coach.is_coach());
        assert!(UserRole::Admin.is_coach());
        assert!(!UserRole::User.is_coach());
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        let mut user = test_user();
        assert_eq!(user.full_name(), "alice");

        user.first_name = Some("Alice".to_string());
        assert_eq!(user.full_name(), "alice");

        user.last_name = Some("Martin".to_string());
        assert_eq!(user.full_name(), "Alice Martin");
    }

    #[test]
    fn test_user_serializes_without_password_field() {
        let serialized = serde_json::to_string(&test_user()).unwrap();
        assert!(serialized.contains("alice@example.com"));
        assert!(!serialized.contains("password"));
    }
}
