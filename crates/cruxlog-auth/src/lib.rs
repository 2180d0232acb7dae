//! # Cruxlog Auth
//!
//! Authentication claims and JWT utilities for the Cruxlog API.
//!
//! This crate provides:
//!
//! - [`claims`]: the JWT claim structure shared by access and refresh tokens
//! - [`jwt`]: token creation, verification, and kind discrimination
//!
//! # Token Types
//!
//! Both token kinds are signed with the same process-wide secret and are
//! told apart by a `type` claim, not by separate keys:
//!
//! - **Access token**: short-lived, carries no `type` claim
//! - **Refresh token**: long-lived, carries `type: "refresh"`
//!
//! A valid signature therefore says nothing about the kind; callers that
//! care must go through [`decode_access_token`] / [`decode_refresh_token`],
//! which check the discriminator after verifying.
//!
//! # Example
//!
//! ```ignore
//! use cruxlog_auth::{create_access_token, decode_access_token};
//! use cruxlog_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token("alice@example.com", &config)?;
//! assert_eq!(
//!     decode_access_token(&token, &config).as_deref(),
//!     Some("alice@example.com")
//! );
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, REFRESH_TOKEN_TYPE};
pub use jwt::{
    create_access_token, create_refresh_token, decode_access_token, decode_refresh_token,
    verify_token,
};
