//! JWT claim structure shared by access and refresh tokens.

use serde::{Deserialize, Serialize};

/// Discriminator value carried by refresh tokens in the `type` claim.
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Claims embedded in every Cruxlog JWT.
///
/// # Fields
///
/// - `sub`: the user's email address (subject)
/// - `exp`: expiry as a Unix timestamp
/// - `iat`: issued-at as a Unix timestamp
/// - `token_type`: `Some("refresh")` on refresh tokens, absent on access
///   tokens — the only thing that tells the two kinds apart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_type: Option<String>,
}

impl Claims {
    /// Whether these claims belong to a refresh token.
    pub fn is_refresh(&self) -> bool {
        self.token_type.as_deref() == Some(REFRESH_TOKEN_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_omit_type_field() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            exp: 1_234_567_890,
            iat: 1_234_567_800,
            token_type: None,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"user@example.com""#));
        assert!(!serialized.contains("type"));
    }

    #[test]
    fn test_refresh_claims_carry_type_field() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            exp: 1_234_567_890,
            iat: 1_234_567_800,
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""type":"refresh""#));
        assert!(claims.is_refresh());
    }

    #[test]
    fn test_claims_deserialize_without_type() {
        let json = r#"{"sub":"user@test.com","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user@test.com");
        assert!(claims.token_type.is_none());
        assert!(!claims.is_refresh());
    }

    #[test]
    fn test_unknown_type_value_is_not_refresh() {
        let json = r#"{"sub":"user@test.com","exp":9999999999,"iat":9999999900,"type":"access"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(!claims.is_refresh());
    }
}
