use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    change_password, delete_account, delete_user, get_config, get_profile, list_users,
    update_config, update_profile,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/change-password", post(change_password))
        .route("/config", get(get_config).put(update_config))
        .route("/account", delete(delete_account))
}

/// Admin-only user management; gated with `require_admin` by the caller.
pub fn init_users_admin_router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_users))
        .route("/{user_id}", delete(delete_user))
}
