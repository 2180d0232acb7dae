//! Identity resolution from bearer tokens.
//!
//! Every failure up to a confirmed identity — missing header, malformed
//! header, bad/expired/wrong-kind token, unknown subject — produces the
//! same 401 so responses reveal nothing about which step failed or
//! whether an account exists. Once the identity is confirmed, the
//! account gates (active, verified) answer with specific 403s.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use cruxlog_auth::decode_access_token;
use cruxlog_core::errors::AppError;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;

fn credentials_error() -> AppError {
    AppError::unauthorized("Invalid or expired token")
}

/// Extractor that resolves the request's bearer token to an active user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format")
        })?;

        let email =
            decode_access_token(token, &state.jwt_config).ok_or_else(credentials_error)?;

        // a vanished account answers exactly like a bad token
        let user = UserService::find_by_email(&state.db, &email)
            .await?
            .ok_or_else(credentials_error)?;

        if !user.is_active {
            return Err(AppError::forbidden("Inactive account"));
        }

        Ok(CurrentUser(user))
    }
}

/// Extractor for endpoints that additionally require a verified email.
#[derive(Debug, Clone)]
pub struct VerifiedUser(pub User);

impl FromRequestParts<AppState> for VerifiedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_verified {
            return Err(AppError::forbidden("Email not verified"));
        }

        Ok(VerifiedUser(user))
    }
}
