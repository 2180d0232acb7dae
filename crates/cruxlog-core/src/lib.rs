//! # Cruxlog Core
//!
//! Core types, errors, and utilities for the Cruxlog API.
//!
//! This crate provides foundational types used throughout the Cruxlog
//! application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Pagination utilities for list endpoints
//! - [`password`]: Password hashing, verification, and strength policy
//!
//! # Example
//!
//! ```ignore
//! use cruxlog_core::errors::AppError;
//! use cruxlog_core::password::{hash_password, verify_password};
//!
//! let hash = hash_password("Secret1pass")?;
//! assert!(verify_password("Secret1pass", &hash));
//!
//! let error = AppError::not_found(anyhow::anyhow!("Route not found"));
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, validate_password_strength, verify_password};
