//! # Cruxlog Config
//!
//! Configuration types for the Cruxlog API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`jwt`]: JWT signing secret and token lifetimes
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: API rate limiting configuration
//!
//! # Example
//!
//! ```ignore
//! use cruxlog_config::{CorsConfig, JwtConfig, RateLimitConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod rate_limit;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
