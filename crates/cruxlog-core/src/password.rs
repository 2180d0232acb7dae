//! Password hashing, verification, and strength policy.
//!
//! Hashes are bcrypt strings that embed their own salt and cost, so a
//! stored hash is all that is needed to verify a candidate later.

use std::fmt;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hashes a plaintext password with bcrypt at the default cost.
///
/// Each call picks a fresh salt, so hashing the same password twice
/// produces two different strings that both verify.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A hash that cannot be parsed counts as a failed match rather than an
/// error, so callers get a plain boolean for any stored value.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}

/// A password-strength policy violation, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrengthError {
    TooShort,
    MissingDigit,
    MissingUppercase,
    MissingLowercase,
}

impl PasswordStrengthError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooShort => "Password must be at least 8 characters long",
            Self::MissingDigit => "Password must contain at least one digit",
            Self::MissingUppercase => "Password must contain at least one uppercase letter",
            Self::MissingLowercase => "Password must contain at least one lowercase letter",
        }
    }
}

impl fmt::Display for PasswordStrengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PasswordStrengthError {}

/// Checks a candidate password against the registration policy.
///
/// Rules are applied in a fixed order and the first violation wins:
/// length of at least 8 characters, then at least one digit, one
/// uppercase letter, and one lowercase letter.
pub fn validate_password_strength(password: &str) -> Result<(), PasswordStrengthError> {
    if password.chars().count() < 8 {
        return Err(PasswordStrengthError::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordStrengthError::MissingDigit);
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(PasswordStrengthError::MissingUppercase);
    }

    if !password.chars().any(char::is_lowercase) {
        return Err(PasswordStrengthError::MissingLowercase);
    }

    Ok(())
}
