//! JWT creation, verification, and kind discrimination.
//!
//! All functions take the [`JwtConfig`] explicitly so callers (and tests)
//! control the secret and lifetimes; nothing here reads ambient state.
//! Verification never returns an error to the caller: any failure —
//! bad signature, malformed token, expiry, wrong kind — collapses to
//! `None`, and the HTTP layer maps that to one uniform unauthorized
//! response.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use cruxlog_config::JwtConfig;
use cruxlog_core::AppError;

use crate::claims::{Claims, REFRESH_TOKEN_TYPE};

/// Creates a short-lived access token for the given subject (email).
///
/// Access tokens carry no `type` claim; its absence is what marks them
/// as access tokens.
///
/// # Errors
///
/// Returns an error only if encoding itself fails (e.g. an unusable
/// secret key).
pub fn create_access_token(subject: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: subject.to_string(),
        exp: now + jwt_config.access_token_expiry,
        iat: now,
        token_type: None,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Creates a long-lived refresh token for the given subject (email).
///
/// Refresh tokens are signed with the same secret as access tokens and
/// differ only in the `type: "refresh"` claim and their lifetime.
pub fn create_refresh_token(subject: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: subject.to_string(),
        exp: now + jwt_config.refresh_token_expiry,
        iat: now,
        token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create refresh token: {}", e)))
}

/// Verifies signature and expiry and returns the decoded claims.
///
/// Returns `None` for any invalid token. The claims may belong to either
/// token kind — use [`decode_access_token`] or [`decode_refresh_token`]
/// when the kind matters.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

/// Decodes an access token and returns the subject email.
///
/// A refresh token presented here verifies fine but is rejected on its
/// `type` claim, so stolen refresh tokens cannot be replayed against
/// access-token endpoints.
pub fn decode_access_token(token: &str, jwt_config: &JwtConfig) -> Option<String> {
    let claims = verify_token(token, jwt_config)?;

    if claims.is_refresh() {
        return None;
    }

    Some(claims.sub)
}

/// Decodes a refresh token and returns the subject email.
///
/// Access tokens are rejected here for the symmetric reason: a leaked
/// short-lived token must not mint a long-lived session.
pub fn decode_refresh_token(token: &str, jwt_config: &JwtConfig) -> Option<String> {
    let claims = verify_token(token, jwt_config)?;

    if !claims.is_refresh() {
        return None;
    }

    Some(claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 604_800,
        }
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();

        let subject = decode_access_token(&token, &config);
        assert_eq!(subject.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let config = get_test_jwt_config();
        let token = create_refresh_token("test@example.com", &config).unwrap();

        let subject = decode_refresh_token(&token, &config);
        assert_eq!(subject.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = get_test_jwt_config();
        let token = create_refresh_token("test@example.com", &config).unwrap();

        // the signature is valid, the kind is not
        assert!(verify_token(&token, &config).is_some());
        assert!(decode_access_token(&token, &config).is_none());
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();

        assert!(verify_token(&token, &config).is_some());
        assert!(decode_refresh_token(&token, &config).is_none());
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        assert!(verify_token("invalid-token", &config).is_none());
        assert!(verify_token("", &config).is_none());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        assert!(verify_token(&token, &wrong_config).is_none());
        assert!(decode_access_token(&token, &wrong_config).is_none());
    }

    #[test]
    fn test_expired_access_token() {
        // negative lifetime puts exp in the past, beyond the decoder leeway
        let config = JwtConfig {
            access_token_expiry: -3600,
            ..get_test_jwt_config()
        };
        let token = create_access_token("test@example.com", &config).unwrap();

        assert!(verify_token(&token, &config).is_none());
        assert!(decode_access_token(&token, &config).is_none());
    }

    #[test]
    fn test_expired_refresh_token() {
        let config = JwtConfig {
            refresh_token_expiry: -3600,
            ..get_test_jwt_config()
        };
        let token = create_refresh_token("test@example.com", &config).unwrap();

        assert!(decode_refresh_token(&token, &config).is_none());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(verify_token(&tampered, &config).is_none());
    }

    #[test]
    fn test_refresh_token_expiry_longer_than_access() {
        let config = get_test_jwt_config();

        let access = create_access_token("test@example.com", &config).unwrap();
        let refresh = create_refresh_token("test@example.com", &config).unwrap();

        let access_claims = verify_token(&access, &config).unwrap();
        let refresh_claims = verify_token(&refresh, &config).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
    }
}
