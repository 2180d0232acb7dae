//! Role-based authorization middleware.
//!
//! Role gates run after identity resolution, so their rejections can be
//! specific: the caller is known, only the privilege is missing.

#![allow(dead_code)]

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use cruxlog_core::errors::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;

/// Checks that the authenticated user holds one of the allowed roles and
/// forwards the request.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer middleware for admin-only routes.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/list", get(list_users))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Layer middleware for coach routes (coaches and admins allowed).
pub async fn require_coach(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::Coach, UserRole::Admin],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Checks a single required role inside handler logic.
pub fn check_role(user: &User, required_role: UserRole) -> Result<(), AppError> {
    if user.role != required_role {
        return Err(forbidden_for(required_role));
    }

    Ok(())
}

/// Checks membership in a set of allowed roles inside handler logic.
pub fn check_any_role(user: &User, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&user.role) {
        // report the weakest role that would have been enough
        let required = allowed_roles
            .iter()
            .copied()
            .min_by_key(|role| role_hierarchy_level(*role))
            .unwrap_or(UserRole::Admin);
        return Err(forbidden_for(required));
    }

    Ok(())
}

fn forbidden_for(role: UserRole) -> AppError {
    match role {
        UserRole::Admin => AppError::forbidden("Admin privileges required"),
        UserRole::Coach => AppError::forbidden("Coach privileges required"),
        UserRole::User => AppError::forbidden("Access denied"),
    }
}

/// Hierarchy level of a role (higher number = more privileges).
pub fn role_hierarchy_level(role: UserRole) -> u8 {
    match role {
        UserRole::Admin => 2,
        UserRole::Coach => 1,
        UserRole::User => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            username: "test".to_string(),
            first_name: None,
            last_name: None,
            avatar_url: None,
            is_active: true,
            is_verified: true,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_role_hierarchy() {
        assert_eq!(role_hierarchy_level(UserRole::Admin), 2);
        assert_eq!(role_hierarchy_level(UserRole::Coach), 1);
        assert_eq!(role_hierarchy_level(UserRole::User), 0);
    }

    #[test]
    fn test_check_role_exact_match() {
        assert!(check_role(&user_with_role(UserRole::Admin), UserRole::Admin).is_ok());
        assert!(check_role(&user_with_role(UserRole::User), UserRole::Admin).is_err());
    }

    #[test]
    fn test_check_any_role_coach_gate_admits_admin() {
        let allowed = [UserRole::Coach, UserRole::Admin];
        assert!(check_any_role(&user_with_role(UserRole::Coach), &allowed).is_ok());
        assert!(check_any_role(&user_with_role(UserRole::Admin), &allowed).is_ok());
        assert!(check_any_role(&user_with_role(UserRole::User), &allowed).is_err());
    }

    #[test]
    fn test_coach_gate_rejection_names_coach() {
        let allowed = [UserRole::Coach, UserRole::Admin];
        let err = check_any_role(&user_with_role(UserRole::User), &allowed).unwrap_err();
        assert_eq!(err.error.to_string(), "Coach privileges required");
    }
}
