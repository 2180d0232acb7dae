use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_running_session, delete_running_session, get_running_session, list_running_sessions,
    update_running_session,
};

pub fn init_running_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_running_sessions).post(create_running_session))
        .route(
            "/{session_id}",
            get(get_running_session)
                .put(update_running_session)
                .delete(delete_running_session),
        )
}
