//! Authentication and authorization middleware.
//!
//! - [`auth`]: bearer-token identity resolution extractors
//! - [`role`]: role gates layered on top of a resolved identity

pub mod auth;
pub mod role;
