//! Feature modules. Each follows the same anatomy: `model.rs` (entities
//! and DTOs), `service.rs` (business logic and SQL), `controller.rs`
//! (HTTP handlers), `router.rs` (route wiring).

pub mod auth;
pub mod exercises;
pub mod goals;
pub mod programs;
pub mod routes;
pub mod running;
pub mod sessions;
pub mod stats;
pub mod users;
