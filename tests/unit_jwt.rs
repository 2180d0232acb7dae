use cruxlog::cruxlog_auth::{
    create_access_token, create_refresh_token, decode_access_token, decode_refresh_token,
    verify_token,
};
use cruxlog::cruxlog_config::jwt::JwtConfig;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 86_400,
        refresh_token_expiry: 604_800,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token("climber@example.com", &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_access_token_round_trip() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token("climber@example.com", &jwt_config).unwrap();
    let subject = decode_access_token(&token, &jwt_config);

    assert_eq!(subject.as_deref(), Some("climber@example.com"));
}

#[test]
fn test_refresh_token_round_trip() {
    let jwt_config = get_test_jwt_config();

    let token = create_refresh_token("climber@example.com", &jwt_config).unwrap();
    let subject = decode_refresh_token(&token, &jwt_config);

    assert_eq!(subject.as_deref(), Some("climber@example.com"));
}

#[test]
fn test_refresh_token_is_not_an_access_token() {
    let jwt_config = get_test_jwt_config();

    let refresh = create_refresh_token("climber@example.com", &jwt_config).unwrap();

    // same secret, valid signature, wrong kind
    assert!(verify_token(&refresh, &jwt_config).is_some());
    assert_eq!(decode_access_token(&refresh, &jwt_config), None);
}

#[test]
fn test_access_token_is_not_a_refresh_token() {
    let jwt_config = get_test_jwt_config();

    let access = create_access_token("climber@example.com", &jwt_config).unwrap();

    assert!(verify_token(&access, &jwt_config).is_some());
    assert_eq!(decode_refresh_token(&access, &jwt_config), None);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("invalid.token.here", &jwt_config).is_none());
    assert!(verify_token("", &jwt_config).is_none());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token("climber@example.com", &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 86_400,
        refresh_token_expiry: 604_800,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_none());
    assert_eq!(decode_access_token(&token, &wrong_jwt_config), None);
    assert_eq!(decode_refresh_token(&token, &wrong_jwt_config), None);
}

#[test]
fn test_expired_access_token_rejected() {
    // mint with a lifetime far enough in the past to clear decoder leeway
    let expired_config = JwtConfig {
        access_token_expiry: -7_200,
        ..get_test_jwt_config()
    };

    let token = create_access_token("climber@example.com", &expired_config).unwrap();

    assert_eq!(decode_access_token(&token, &expired_config), None);
}

#[test]
fn test_expired_refresh_token_rejected() {
    let expired_config = JwtConfig {
        refresh_token_expiry: -7_200,
        ..get_test_jwt_config()
    };

    let token = create_refresh_token("climber@example.com", &expired_config).unwrap();

    assert_eq!(decode_refresh_token(&token, &expired_config), None);
}

#[test]
fn test_refresh_outlives_access() {
    let jwt_config = get_test_jwt_config();

    let access = create_access_token("climber@example.com", &jwt_config).unwrap();
    let refresh = create_refresh_token("climber@example.com", &jwt_config).unwrap();

    let access_claims = verify_token(&access, &jwt_config).unwrap();
    let refresh_claims = verify_token(&refresh, &jwt_config).unwrap();

    assert!(refresh_claims.exp > access_claims.exp);
}

#[test]
fn test_login_style_token_pair_flow() {
    // the pair issued at login: each token only works through its own gate
    let jwt_config = get_test_jwt_config();
    let email = "climber@example.com";

    let access = create_access_token(email, &jwt_config).unwrap();
    let refresh = create_refresh_token(email, &jwt_config).unwrap();

    assert_eq!(decode_access_token(&access, &jwt_config).as_deref(), Some(email));
    assert_eq!(decode_refresh_token(&refresh, &jwt_config).as_deref(), Some(email));
    assert_eq!(decode_access_token(&refresh, &jwt_config), None);
    assert_eq!(decode_refresh_token(&access, &jwt_config), None);

    // refresh yields a fresh pair for the same subject
    let renewed = decode_refresh_token(&refresh, &jwt_config).unwrap();
    let new_access = create_access_token(&renewed, &jwt_config).unwrap();
    assert_eq!(decode_access_token(&new_access, &jwt_config).as_deref(), Some(email));
}
