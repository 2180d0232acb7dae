use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request.
///
/// Password strength is checked by the service policy, not here — the
/// policy messages are part of the API contract.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Login request. The identifier may be an email address or a username.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_dto_rejects_bad_email() {
        let dto = RegisterRequestDto {
            email: "not-an-email".to_string(),
            username: "climber".to_string(),
            password: "Valid1Pass".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_short_username() {
        let dto = RegisterRequestDto {
            email: "climber@example.com".to_string(),
            username: "ab".to_string(),
            password: "Valid1Pass".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_request_accepts_username_identifier() {
        let dto = LoginRequest {
            identifier: "climber".to_string(),
            password: "whatever".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_token_response_bearer() {
        let response = TokenResponse::bearer("a".to_string(), "r".to_string());
        assert_eq!(response.token_type, "bearer");
        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains(r#""token_type":"bearer""#));
    }
}
