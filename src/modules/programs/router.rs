use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    activate_program, create_program, delete_program, get_program, list_programs, update_program,
};

pub fn init_programs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route(
            "/{program_id}",
            get(get_program).put(update_program).delete(delete_program),
        )
        .route("/{program_id}/activate", post(activate_program))
}
