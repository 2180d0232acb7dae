use cruxlog::cruxlog_core::password::{
    PasswordStrengthError, hash_password, validate_password_strength, verify_password,
};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash));
}

#[test]
fn test_verify_password_incorrect() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("wrongpassword", &hash));
}

#[test]
fn test_verify_password_invalid_hash_is_false() {
    // an unparseable stored hash is a failed match, not an error
    assert!(!verify_password("testpassword", "not_a_valid_bcrypt_hash"));
    assert!(!verify_password("testpassword", ""));
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1));
    assert!(verify_password(password, &hash2));
}

#[test]
fn test_hash_special_characters() {
    let password = "p@ssw0rd!#$%^&*()";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash));
}

#[test]
fn test_verify_case_sensitive() {
    let password = "Password123";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("password123", &hash));
    assert!(!verify_password("PASSWORD123", &hash));
}

#[test]
fn test_strength_too_short() {
    assert_eq!(
        validate_password_strength("short1A"),
        Err(PasswordStrengthError::TooShort)
    );
}

#[test]
fn test_strength_missing_digit() {
    assert_eq!(
        validate_password_strength("NoDigitsHere"),
        Err(PasswordStrengthError::MissingDigit)
    );
}

#[test]
fn test_strength_missing_uppercase() {
    assert_eq!(
        validate_password_strength("alllowercase1"),
        Err(PasswordStrengthError::MissingUppercase)
    );
}

#[test]
fn test_strength_missing_lowercase() {
    assert_eq!(
        validate_password_strength("ALLUPPERCASE1"),
        Err(PasswordStrengthError::MissingLowercase)
    );
}

#[test]
fn test_strength_accepts_valid_password() {
    assert!(validate_password_strength("Valid1Pass").is_ok());
}

#[test]
fn test_strength_checks_in_fixed_order() {
    // a password failing several rules reports the length rule first
    assert_eq!(
        validate_password_strength("abc"),
        Err(PasswordStrengthError::TooShort)
    );
}

#[test]
fn test_strength_error_messages() {
    assert_eq!(
        PasswordStrengthError::TooShort.message(),
        "Password must be at least 8 characters long"
    );
    assert_eq!(
        PasswordStrengthError::MissingDigit.message(),
        "Password must contain at least one digit"
    );
}
