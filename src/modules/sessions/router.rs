use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::AppState;

use super::controller::{
    create_planning, create_template, create_training, delete_planning, delete_template,
    delete_training, list_planning, list_templates, list_training, update_planning,
};

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates).post(create_template))
        .route("/templates/{template_id}", delete(delete_template))
        .route("/planning", get(list_planning).post(create_planning))
        .route(
            "/planning/{planning_id}",
            put(update_planning).delete(delete_planning),
        )
        .route("/training", get(list_training).post(create_training))
        .route("/training/{session_id}", delete(delete_training))
}
