use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_exercise, delete_exercise, get_exercise, list_exercises, update_exercise,
};

pub fn init_exercises_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route(
            "/{exercise_id}",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
}
